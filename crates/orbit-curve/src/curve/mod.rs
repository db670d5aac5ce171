//! Curve traits and implementations.

mod line;
mod ellipse;
mod lemniscate;
mod bezier;

use orbit_math::Point3;

pub use line::Line;
pub use ellipse::Ellipse;
pub use lemniscate::Lemniscate;
pub use bezier::CubicBezier;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);
}
