//! Cubic Bezier segment evaluated through the Bernstein basis matrix.

use orbit_math::{BasisMatrix, Point3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// One cubic Bezier segment, parameterized over `[0, 1]`.
///
/// Interpolates its first and last control points; the inner two only
/// pull the curve toward them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CubicBezier {
    pub control_points: [Point3; 4],
}

impl CubicBezier {
    pub fn new(control_points: [Point3; 4]) -> Self {
        Self { control_points }
    }
}

impl Curve for CubicBezier {
    fn point_at(&self, t: f64) -> Point3 {
        BasisMatrix::BEZIER.blend(t, &self.control_points)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_math::DVec3;

    fn arch() -> CubicBezier {
        CubicBezier::new([
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
        ])
    }

    #[test]
    fn test_bezier_endpoints_are_exact() {
        let curve = arch();
        assert_eq!(curve.point_at(0.0), curve.control_points[0]);
        assert_eq!(curve.point_at(1.0), curve.control_points[3]);
    }

    #[test]
    fn test_bezier_midpoint() {
        // (P0 + 3 P1 + 3 P2 + P3) / 8 = (0.5, 0.75, 0)
        let p = arch().point_at(0.5);
        assert!((p - DVec3::new(0.5, 0.75, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_bezier_stays_in_control_hull() {
        let curve = arch();
        for i in 0..=20 {
            let p = curve.point_at(i as f64 / 20.0);
            assert!(p.x >= -1e-12 && p.x <= 1.0 + 1e-12);
            assert!(p.y >= -1e-12 && p.y <= 1.0 + 1e-12);
        }
    }
}
