//! Scene objects and how their positions are driven.

use orbit_curve::{PathCursor, PathFollower};
use orbit_math::{Point3, Transform};
use slotmap::new_key_type;

use crate::material::Material;

new_key_type! {
    pub struct ObjectId;
}

/// Who owns an object's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MotionMode {
    /// Never moved since loading.
    #[default]
    Static,
    /// Positioned by the user's controls.
    ManualControl,
    /// Walks the scene curve; the cursor is private to this object.
    PathAnimated { cursor: PathCursor },
}

impl MotionMode {
    pub fn path_animated() -> Self {
        MotionMode::PathAnimated {
            cursor: PathCursor::START,
        }
    }

    pub fn is_path_animated(&self) -> bool {
        matches!(self, MotionMode::PathAnimated { .. })
    }
}

#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    /// Mesh file the renderer loads for this object.
    pub mesh_file: String,
    pub transform: Transform,
    pub material: Material,
    pub motion: MotionMode,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, mesh_file: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mesh_file: mesh_file.into(),
            transform: Transform::identity(),
            material: Material::default(),
            motion: MotionMode::Static,
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_motion(mut self, motion: MotionMode) -> Self {
        self.motion = motion;
        self
    }

    pub fn position(&self) -> Point3 {
        self.transform.position
    }
}

impl PathFollower for SceneObject {
    fn move_to(&mut self, position: Point3) {
        self.transform.position = position;
    }
}
