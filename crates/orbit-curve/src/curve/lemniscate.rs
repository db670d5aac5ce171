//! Lemniscate of Bernoulli in the XY plane.

use std::f64::consts::TAU;

use orbit_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// Figure-eight curve parameterized over `[0, 2*PI]`:
///
/// ```text
/// x(t) = s cos t / (sin^2 t + 1)
/// y(t) = s sin t cos t / (sin^2 t + 1)
/// ```
///
/// The lobes reach `x = +-s`; both lobes cross at `center`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lemniscate {
    pub center: Point3,
    pub size: f64,
}

impl Lemniscate {
    pub fn new(center: Point3, size: f64) -> Self {
        Self { center, size }
    }
}

impl Curve for Lemniscate {
    fn point_at(&self, t: f64) -> Point3 {
        let (sin, cos) = t.sin_cos();
        let d = sin * sin + 1.0;
        self.center + Vector3::new(self.size * cos / d, self.size * sin * cos / d, 0.0)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use orbit_math::DVec3;

    #[test]
    fn test_lemniscate_key_points() {
        let curve = Lemniscate::new(DVec3::ZERO, 3.0);

        assert!((curve.point_at(0.0) - DVec3::new(3.0, 0.0, 0.0)).length() < 1e-12);
        assert!((curve.point_at(PI) - DVec3::new(-3.0, 0.0, 0.0)).length() < 1e-12);
        // Crossing point
        assert!(curve.point_at(PI / 2.0).length() < 1e-12);
        assert!(curve.point_at(3.0 * PI / 2.0).length() < 1e-12);
    }

    #[test]
    fn test_lemniscate_satisfies_implicit_form() {
        // (x^2 + y^2)^2 = s^2 (x^2 - y^2)
        let s = 2.0;
        let curve = Lemniscate::new(DVec3::ZERO, s);
        for i in 0..32 {
            let t = i as f64 * PI / 16.0;
            let p = curve.point_at(t);
            let r2 = p.x * p.x + p.y * p.y;
            assert!((r2 * r2 - s * s * (p.x * p.x - p.y * p.y)).abs() < 1e-10);
        }
    }
}
