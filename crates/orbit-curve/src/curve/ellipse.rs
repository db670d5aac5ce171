//! Axis-aligned planar ellipse.

use std::f64::consts::TAU;

use orbit_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::Curve;

/// An ellipse in the XY plane, parameterized over `[0, 2*PI]`.
///
/// `x(t) = a cos t`, `y(t) = b sin t`, offset by `center`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ellipse {
    pub center: Point3,
    /// Semi-axis along X.
    pub a: f64,
    /// Semi-axis along Y.
    pub b: f64,
}

impl Ellipse {
    pub fn new(center: Point3, a: f64, b: f64) -> Self {
        Self { center, a, b }
    }
}

impl Curve for Ellipse {
    fn point_at(&self, t: f64) -> Point3 {
        self.center + Vector3::new(self.a * t.cos(), self.b * t.sin(), 0.0)
    }

    fn domain(&self) -> (f64, f64) {
        (0.0, TAU)
    }
}
