//! Combined settings for building an animation curve in one step.

use orbit_core::traits::Validate;
use orbit_core::Result;
use serde::{Deserialize, Serialize};

use crate::path::{CurvePath, PathSettings};
use crate::polygon::{ControlPolygon, PolygonSettings};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CurveSettings {
    pub polygon: PolygonSettings,
    pub path: PathSettings,
}

impl Validate for CurveSettings {
    fn validate(&self) -> Result<()> {
        self.polygon.validate()?;
        self.path.validate()
    }
}

impl CurveSettings {
    /// Generate the control polygon and sample its path.
    ///
    /// Both settings are validated before anything is built.
    pub fn build(&self) -> Result<(ControlPolygon, CurvePath)> {
        self.validate()?;
        let polygon = ControlPolygon::generate(&self.polygon)?;
        let path = CurvePath::build(&polygon, &self.path)?;
        Ok((polygon, path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_core::OrbitError;

    #[test]
    fn test_invalid_density_fails_before_generation() {
        let settings = CurveSettings {
            path: PathSettings {
                samples_per_segment: 0,
                smoothing_points: 20,
            },
            ..CurveSettings::default()
        };
        assert!(matches!(settings.build(), Err(OrbitError::InvalidConfig(_))));
    }

    #[test]
    fn test_default_build() {
        let (polygon, path) = CurveSettings::default().build().unwrap();
        assert_eq!(polygon.len(), 21);
        assert!(!path.is_empty());
    }
}
