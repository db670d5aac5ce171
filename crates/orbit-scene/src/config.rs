//! JSON scene configuration.

use std::path::Path;

use orbit_core::traits::Validate;
use orbit_core::{OrbitError, Result};
use orbit_curve::{CurveSettings, PathSettings, PolygonSettings, Shape};
use orbit_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3Config {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3Config {
    pub const ZERO: Self = Self::splat(0.0);
    pub const ONE: Self = Self::splat(1.0);

    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }
}

impl From<Vec3Config> for Vector3 {
    fn from(v: Vec3Config) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

fn zero() -> Vec3Config {
    Vec3Config::ZERO
}

fn one() -> Vec3Config {
    Vec3Config::ONE
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectConfig {
    /// Mesh file name, also used as the object name when `name` is absent.
    pub file: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub material_name: Option<String>,
    #[serde(default = "zero")]
    pub position: Vec3Config,
    /// Degrees
    #[serde(default = "zero")]
    pub rotation: Vec3Config,
    #[serde(default = "one")]
    pub scale: Vec3Config,
    #[serde(default)]
    pub is_moving_along_curve: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraConfig {
    pub position: Vec3Config,
    /// Point the camera looks at.
    pub view_direction: Vec3Config,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrustumConfig {
    /// Vertical field of view in degrees
    pub field_of_view: f64,
    pub near_plane: f64,
    pub far_plane: f64,
}

impl Default for FrustumConfig {
    fn default() -> Self {
        Self {
            field_of_view: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Ellipse,
    Lemniscate,
}

/// Flat curve block; only the parameters of the chosen shape are read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurveConfig {
    pub shape: ShapeKind,
    pub point_count: usize,
    pub samples_per_segment: usize,
    pub smoothing_points: usize,
    pub a: f64,
    pub b: f64,
    pub size: f64,
    pub scale: f64,
    pub vertical_offset: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            shape: ShapeKind::Ellipse,
            point_count: 20,
            samples_per_segment: PathSettings::DEFAULT_SAMPLES_PER_SEGMENT,
            smoothing_points: PathSettings::DEFAULT_SMOOTHING_POINTS,
            a: 2.0,
            b: 1.0,
            size: 2.0,
            scale: 1.0,
            vertical_offset: 0.0,
        }
    }
}

impl CurveConfig {
    pub fn settings(&self) -> CurveSettings {
        let shape = match self.shape {
            ShapeKind::Ellipse => Shape::Ellipse {
                a: self.a,
                b: self.b,
            },
            ShapeKind::Lemniscate => Shape::Lemniscate { size: self.size },
        };
        CurveSettings {
            polygon: PolygonSettings {
                shape,
                point_count: self.point_count,
                scale: self.scale,
                vertical_offset: self.vertical_offset,
            },
            path: PathSettings {
                samples_per_segment: self.samples_per_segment,
                smoothing_points: self.smoothing_points,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneConfig {
    pub objects: Vec<ObjectConfig>,
    #[serde(default)]
    pub camera: Option<CameraConfig>,
    #[serde(default)]
    pub frustum: FrustumConfig,
    #[serde(default)]
    pub curve: CurveConfig,
}

impl SceneConfig {
    pub fn from_json(source: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json(&source)
    }
}

impl Validate for SceneConfig {
    fn validate(&self) -> Result<()> {
        let f = &self.frustum;
        if !(f.field_of_view > 0.0 && f.field_of_view < 180.0) {
            return Err(OrbitError::invalid_config(format!(
                "field of view must be within (0, 180) degrees, got {}",
                f.field_of_view
            )));
        }
        if !(f.near_plane > 0.0 && f.far_plane > f.near_plane) {
            return Err(OrbitError::invalid_config(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                f.near_plane, f.far_plane
            )));
        }

        if let Some(camera) = &self.camera {
            let eye: Point3 = camera.position.into();
            let target: Point3 = camera.view_direction.into();
            if eye == target {
                return Err(OrbitError::invalid_config(
                    "camera position and view target coincide",
                ));
            }
        }

        for (i, object) in self.objects.iter().enumerate() {
            if object.file.trim().is_empty() {
                return Err(OrbitError::invalid_config(format!(
                    "object {i} has no mesh file"
                )));
            }
        }

        self.curve.settings().validate()
    }
}
