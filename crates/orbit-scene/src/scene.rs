//! The scene context: objects, selection, camera, light and the curve
//! animation driven once per frame.

use orbit_core::{OrbitError, Result};
use orbit_curve::CurveSettings;
use orbit_math::{Aabb3, DMat4, Point3, Transform};
use slotmap::SlotMap;

use crate::animation::AnimationContext;
use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::controls::ControlInput;
use crate::material::Material;
use crate::mtl::MaterialLibrary;
use crate::object::{MotionMode, ObjectId, SceneObject};
use crate::uniforms::{mat4_to_gl, vec3_to_gl, FrameUniforms, ObjectUniforms};

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Point3,
    pub color: [f32; 3],
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Point3::new(2.0, 2.0, 2.0),
            color: [1.0, 1.0, 1.0],
        }
    }
}

/// Objects, camera, light and curve animation of one viewer session.
///
/// The camera is written only through camera controls; object positions
/// are written by the curve animation or by object controls depending on
/// each object's [`MotionMode`].
pub struct Scene {
    objects: SlotMap<ObjectId, SceneObject>,
    /// Insertion order, used for selection cycling and drawing
    order: Vec<ObjectId>,
    selected: Option<usize>,
    pub camera: Camera,
    pub light: Light,
    animation: AnimationContext,
}

impl Scene {
    /// Create an empty scene animating along the given curve.
    pub fn new(curve: CurveSettings) -> Result<Self> {
        Ok(Self {
            objects: SlotMap::with_key(),
            order: Vec::new(),
            selected: None,
            camera: Camera::default(),
            light: Light::default(),
            animation: AnimationContext::new(curve)?,
        })
    }

    /// Build a scene from a parsed configuration and its material libraries.
    ///
    /// Objects naming a material missing from `materials` get the default
    /// material. Without a configured camera, the default camera is fitted
    /// to the curve path.
    pub fn from_config(config: &SceneConfig, materials: &MaterialLibrary) -> Result<Self> {
        let mut scene = Self::new(config.curve.settings())?;

        let frustum = &config.frustum;
        scene.camera.fov_y = frustum.field_of_view;
        scene.camera.near = frustum.near_plane;
        scene.camera.far = frustum.far_plane;
        match &config.camera {
            Some(camera) => {
                scene.camera.eye = camera.position.into();
                scene.camera.target = camera.view_direction.into();
            }
            None => {
                if let Some(bounds) = Aabb3::from_points(scene.animation.path().points()) {
                    scene.camera.fit_to_aabb(&bounds);
                }
            }
        }

        for object_config in &config.objects {
            let material = match object_config.material_name.as_deref() {
                Some(name) => match materials.get(name) {
                    Some(mtl) => Material::from_mtl(mtl),
                    None => {
                        log::warn!(
                            "material '{}' of {} not found, using default",
                            name,
                            object_config.file
                        );
                        Material::default()
                    }
                },
                None => Material::default(),
            };
            let motion = if object_config.is_moving_along_curve {
                MotionMode::path_animated()
            } else {
                MotionMode::Static
            };
            let name = object_config
                .name
                .clone()
                .unwrap_or_else(|| object_config.file.clone());

            let object = SceneObject::new(name, object_config.file.clone())
                .with_transform(Transform {
                    position: object_config.position.into(),
                    rotation: object_config.rotation.into(),
                    scale: object_config.scale.into(),
                })
                .with_material(material)
                .with_motion(motion);
            scene.add_object(object);
        }

        log::info!(
            "scene loaded: {} objects, {} animated, {} path samples",
            scene.len(),
            scene.animated_count(),
            scene.animation.path().len()
        );
        Ok(scene)
    }

    /// Add an object; the first object added becomes the selection.
    pub fn add_object(&mut self, object: SceneObject) -> ObjectId {
        let id = self.objects.insert(object);
        self.order.push(id);
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        id
    }

    pub fn object(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(id)
    }

    /// Objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> + '_ {
        self.order.iter().map(move |&id| (id, &self.objects[id]))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn animated_count(&self) -> usize {
        self.objects
            .values()
            .filter(|o| o.motion.is_path_animated())
            .count()
    }

    pub fn animation(&self) -> &AnimationContext {
        &self.animation
    }

    /// Replace the curve. Every animated object restarts from the first sample.
    pub fn set_curve(&mut self, curve: CurveSettings) -> Result<()> {
        self.animation = AnimationContext::new(curve)?;
        for object in self.objects.values_mut() {
            if object.motion.is_path_animated() {
                object.motion = MotionMode::path_animated();
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected.map(|i| self.order[i])
    }

    pub fn select_next(&mut self) -> Option<ObjectId> {
        if let Some(i) = self.selected {
            self.selected = Some((i + 1) % self.order.len());
        }
        self.selected()
    }

    pub fn select_previous(&mut self) -> Option<ObjectId> {
        if let Some(i) = self.selected {
            let n = self.order.len();
            self.selected = Some((i + n - 1) % n);
        }
        self.selected()
    }

    // -----------------------------------------------------------------------
    // Controls and animation
    // -----------------------------------------------------------------------

    /// Apply one manual control value.
    ///
    /// Moving a path-animated object is refused: its position belongs to
    /// the curve animation. A static object becomes manually controlled on
    /// its first move.
    pub fn apply_control(&mut self, input: ControlInput) -> Result<()> {
        match input {
            ControlInput::CameraPosition(axis, value) => axis.set(&mut self.camera.eye, value),
            ControlInput::CameraTarget(axis, value) => axis.set(&mut self.camera.target, value),
            ControlInput::Move(axis, value) => {
                let object = self.selected_object_mut()?;
                if object.motion.is_path_animated() {
                    return Err(OrbitError::InvalidOperation(format!(
                        "{} follows the curve and cannot be moved manually",
                        object.name
                    )));
                }
                object.motion = MotionMode::ManualControl;
                axis.set(&mut object.transform.position, value);
            }
            ControlInput::Rotate(axis, value) => {
                axis.set(&mut self.selected_object_mut()?.transform.rotation, value)
            }
            ControlInput::Scale(axis, value) => {
                axis.set(&mut self.selected_object_mut()?.transform.scale, value)
            }
            ControlInput::Ambient(v) => self.selected_object_mut()?.material.ka = v,
            ControlInput::Diffuse(v) => self.selected_object_mut()?.material.kd = v,
            ControlInput::Specular(v) => self.selected_object_mut()?.material.ks = v,
        }
        Ok(())
    }

    fn selected_object_mut(&mut self) -> Result<&mut SceneObject> {
        let id = self
            .selected()
            .ok_or_else(|| OrbitError::NotFound("no object selected".into()))?;
        Ok(&mut self.objects[id])
    }

    /// Advance every path-animated object by one sample.
    ///
    /// Returns how many objects moved.
    pub fn tick(&mut self) -> Result<usize> {
        let mut moved = 0;
        for &id in &self.order {
            if self.animation.step(&mut self.objects[id])? {
                moved += 1;
            }
        }
        Ok(moved)
    }

    // -----------------------------------------------------------------------
    // Rendering interface
    // -----------------------------------------------------------------------

    /// Collect the uniforms the renderer needs to draw this frame.
    pub fn frame(&self) -> FrameUniforms {
        let selected = self.selected();
        let objects = self
            .objects()
            .map(|(id, object)| {
                let model = object.transform.to_mat4();
                let normal = object.transform.normal_matrix().unwrap_or_else(|| {
                    log::debug!("{} has a degenerate scale, using identity normals", object.name);
                    DMat4::IDENTITY
                });
                let material = &object.material;
                ObjectUniforms {
                    mesh_file: object.mesh_file.clone(),
                    model: mat4_to_gl(&model),
                    normal: mat4_to_gl(&normal),
                    color: material.color,
                    ka: material.ka,
                    kd: material.kd,
                    ks: material.ks,
                    shininess: material.shininess,
                    is_selected: Some(id) == selected,
                    has_texture: material.has_texture(),
                    texture: material.texture.clone(),
                }
            })
            .collect();

        FrameUniforms {
            view: mat4_to_gl(&self.camera.view_matrix()),
            projection: mat4_to_gl(&self.camera.projection_matrix()),
            camera_position: vec3_to_gl(self.camera.eye),
            light_position: vec3_to_gl(self.light.position),
            light_color: self.light.color,
            objects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::Axis;
    use orbit_curve::PathCursor;
    use orbit_math::DVec3;

    fn scene_with(motions: &[MotionMode]) -> (Scene, Vec<ObjectId>) {
        let mut scene = Scene::new(CurveSettings::default()).unwrap();
        let ids = motions
            .iter()
            .enumerate()
            .map(|(i, &motion)| {
                scene.add_object(
                    SceneObject::new(format!("obj{i}"), "cube.obj").with_motion(motion),
                )
            })
            .collect();
        (scene, ids)
    }

    #[test]
    fn test_selection_cycles_both_ways() {
        let (mut scene, ids) = scene_with(&[MotionMode::Static; 3]);
        assert_eq!(scene.selected(), Some(ids[0]));
        assert_eq!(scene.select_next(), Some(ids[1]));
        assert_eq!(scene.select_next(), Some(ids[2]));
        assert_eq!(scene.select_next(), Some(ids[0]));
        assert_eq!(scene.select_previous(), Some(ids[2]));
    }

    #[test]
    fn test_selection_on_empty_scene() {
        let (mut scene, _) = scene_with(&[]);
        assert_eq!(scene.select_next(), None);
        assert_eq!(scene.select_previous(), None);
        assert!(matches!(
            scene.apply_control(ControlInput::Move(Axis::X, 1.0)),
            Err(OrbitError::NotFound(_))
        ));
        // Camera controls need no selection
        scene
            .apply_control(ControlInput::CameraPosition(Axis::Z, 9.0))
            .unwrap();
        assert_eq!(scene.camera.eye.z, 9.0);
    }

    #[test]
    fn test_tick_moves_only_animated_objects_with_own_cursors() {
        let (mut scene, ids) = scene_with(&[
            MotionMode::path_animated(),
            MotionMode::Static,
            MotionMode::PathAnimated {
                cursor: PathCursor::new(10),
            },
        ]);
        let path = scene.animation().path().clone();

        assert_eq!(scene.tick().unwrap(), 2);
        assert_eq!(scene.tick().unwrap(), 2);

        assert_eq!(scene.object(ids[0]).unwrap().position(), path.points()[1]);
        assert_eq!(scene.object(ids[1]).unwrap().position(), DVec3::ZERO);
        assert_eq!(scene.object(ids[2]).unwrap().position(), path.points()[11]);
        assert_eq!(
            scene.object(ids[0]).unwrap().motion,
            MotionMode::PathAnimated {
                cursor: PathCursor::new(2)
            }
        );
    }

    #[test]
    fn test_manual_move_rules() {
        let (mut scene, ids) = scene_with(&[MotionMode::Static, MotionMode::path_animated()]);

        scene.apply_control(ControlInput::Move(Axis::Y, 3.0)).unwrap();
        let first = scene.object(ids[0]).unwrap();
        assert_eq!(first.motion, MotionMode::ManualControl);
        assert_eq!(first.position(), DVec3::new(0.0, 3.0, 0.0));

        scene.select_next();
        let err = scene
            .apply_control(ControlInput::Move(Axis::X, 1.0))
            .unwrap_err();
        assert!(matches!(err, OrbitError::InvalidOperation(_)));

        // Orientation and material stay under manual control
        scene.apply_control(ControlInput::Rotate(Axis::Z, 30.0)).unwrap();
        scene.apply_control(ControlInput::Scale(Axis::X, 2.0)).unwrap();
        scene.apply_control(ControlInput::Specular(0.1)).unwrap();
        let second = scene.object(ids[1]).unwrap();
        assert!(second.motion.is_path_animated());
        assert_eq!(second.transform.rotation.z, 30.0);
        assert_eq!(second.transform.scale.x, 2.0);
        assert_eq!(second.material.ks, 0.1);
    }

    #[test]
    fn test_tick_on_empty_path_fails() {
        let settings = CurveSettings {
            polygon: orbit_curve::PolygonSettings {
                point_count: 2,
                ..Default::default()
            },
            ..CurveSettings::default()
        };
        let mut scene = Scene::new(settings).unwrap();
        // No animated objects: nothing to traverse
        scene.add_object(SceneObject::new("still", "still.obj"));
        assert_eq!(scene.tick().unwrap(), 0);

        scene.add_object(
            SceneObject::new("mover", "mover.obj").with_motion(MotionMode::path_animated()),
        );
        assert!(matches!(scene.tick(), Err(OrbitError::EmptyPath)));
    }

    #[test]
    fn test_set_curve_resets_cursors() {
        let (mut scene, ids) = scene_with(&[MotionMode::path_animated(), MotionMode::ManualControl]);
        scene.tick().unwrap();
        scene.tick().unwrap();

        let mut lemniscate = CurveSettings::default();
        lemniscate.polygon.shape = orbit_curve::Shape::Lemniscate { size: 1.0 };
        scene.set_curve(lemniscate).unwrap();

        assert_eq!(scene.object(ids[0]).unwrap().motion, MotionMode::path_animated());
        assert_eq!(scene.object(ids[1]).unwrap().motion, MotionMode::ManualControl);
        scene.tick().unwrap();
        assert_eq!(
            scene.object(ids[0]).unwrap().position(),
            scene.animation().path().points()[0]
        );
    }

    #[test]
    fn test_camera_on_target_still_frames() {
        let (mut scene, _) = scene_with(&[MotionMode::Static]);
        scene
            .apply_control(ControlInput::CameraPosition(Axis::Z, 0.0))
            .unwrap();
        assert_eq!(scene.camera.eye, scene.camera.target);

        let frame = scene.frame();
        assert!(frame.view.iter().all(|v| v.is_finite()));
        assert!(frame.projection.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn test_frame_uniforms() {
        let (mut scene, _) = scene_with(&[MotionMode::Static, MotionMode::Static]);
        scene.select_next();
        scene
            .apply_control(ControlInput::Move(Axis::X, 4.0))
            .unwrap();

        let frame = scene.frame();
        assert_eq!(frame.objects.len(), 2);
        assert!(!frame.objects[0].is_selected);
        assert!(frame.objects[1].is_selected);
        // Column-major translation
        assert_eq!(frame.objects[1].model[12], 4.0);
        assert_eq!(frame.light_position, [2.0, 2.0, 2.0]);
        assert_eq!(frame.camera_position, [0.0, 0.0, 5.0]);
        assert_eq!(frame.objects[0].color, [1.0, 0.5, 0.31]);
        assert!(!frame.objects[0].has_texture);
    }
}
