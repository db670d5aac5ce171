//! Cubic basis matrices for segment evaluation.

use crate::{DVec4, Point3};
use serde::{Deserialize, Serialize};

/// A 4x4 characteristic matrix of a cubic curve basis.
///
/// Stored row-major and applied with the monomial vector on the left:
/// `weights = [t^3, t^2, t, 1] * M`. Entry `rows[k][j]` is the coefficient
/// of the `k`-th monomial in the blending polynomial of control point `j`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BasisMatrix {
    rows: [[f64; 4]; 4],
}

impl BasisMatrix {
    /// Bernstein basis of the cubic Bezier curve.
    pub const BEZIER: Self = Self::from_rows([
        [-1.0, 3.0, -3.0, 1.0],
        [3.0, -6.0, 3.0, 0.0],
        [-3.0, 3.0, 0.0, 0.0],
        [1.0, 0.0, 0.0, 0.0],
    ]);

    pub const fn from_rows(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[[f64; 4]; 4] {
        &self.rows
    }

    /// Blending weights of the four control points at parameter `t`.
    pub fn weights(&self, t: f64) -> DVec4 {
        self.apply([t * t * t, t * t, t, 1.0])
    }

    /// Combine four control points with the weights at `t`.
    ///
    /// The weight row is multiplied against the 4x3 matrix whose rows are the
    /// control point coordinates.
    pub fn blend(&self, t: f64, points: &[Point3; 4]) -> Point3 {
        let w = self.weights(t);
        points[0] * w.x + points[1] * w.y + points[2] * w.z + points[3] * w.w
    }

    fn apply(&self, monomials: [f64; 4]) -> DVec4 {
        let mut out = [0.0; 4];
        for (j, w) in out.iter_mut().enumerate() {
            for (k, m) in monomials.iter().enumerate() {
                *w += m * self.rows[k][j];
            }
        }
        DVec4::from_array(out)
    }
}
