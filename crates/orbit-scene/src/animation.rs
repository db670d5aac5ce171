//! Curve state shared by every path-animated object in a scene.

use orbit_core::Result;
use orbit_curve::{advance, ControlPolygon, CurvePath, CurveSettings};

use crate::object::{MotionMode, SceneObject};

/// Control polygon and sampled path the scene animates along.
///
/// Built once from [`CurveSettings`]; rebuilt wholesale when they change.
#[derive(Debug, Clone)]
pub struct AnimationContext {
    settings: CurveSettings,
    polygon: ControlPolygon,
    path: CurvePath,
}

impl AnimationContext {
    pub fn new(settings: CurveSettings) -> Result<Self> {
        let (polygon, path) = settings.build()?;
        Ok(Self {
            settings,
            polygon,
            path,
        })
    }

    pub fn settings(&self) -> &CurveSettings {
        &self.settings
    }

    pub fn polygon(&self) -> &ControlPolygon {
        &self.polygon
    }

    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    /// Move a path-animated object one sample forward.
    ///
    /// Returns `Ok(false)` without touching objects in any other mode.
    pub fn step(&self, object: &mut SceneObject) -> Result<bool> {
        let MotionMode::PathAnimated { cursor } = object.motion else {
            return Ok(false);
        };
        let next = advance(object, &self.path, cursor)?;
        object.motion = MotionMode::PathAnimated { cursor: next };
        Ok(true)
    }
}
