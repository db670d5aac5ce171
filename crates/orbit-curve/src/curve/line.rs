//! Line segment curve.

use orbit_math::Point3;
use serde::{Deserialize, Serialize};

use super::Curve;

/// A line segment from `start` to `end`, parameterized over `[0, 1]`.
///
/// Used to bridge the end of a sampled path back to its start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub start: Point3,
    pub end: Point3,
}

impl Line {
    pub fn new(start: Point3, end: Point3) -> Self {
        Self { start, end }
    }
}

impl Curve for Line {
    fn point_at(&self, t: f64) -> Point3 {
        self.start.lerp(self.end, t)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_math::DVec3;

    #[test]
    fn test_line_interpolation() {
        let line = Line::new(DVec3::new(4.0, 0.0, 0.0), DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(line.point_at(0.0), DVec3::new(4.0, 0.0, 0.0));
        assert!((line.point_at(0.25) - DVec3::new(3.0, 0.5, 0.0)).length() < 1e-12);
        assert!((line.point_at(1.0) - DVec3::new(0.0, 2.0, 0.0)).length() < 1e-12);
    }
}
