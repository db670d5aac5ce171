//! Closed control polygons sampled from planar shapes.

use orbit_core::traits::{BoundingBox, Validate};
use orbit_core::{OrbitError, Result};
use orbit_math::{Aabb3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::curve::{CubicBezier, Curve, Ellipse, Lemniscate};

/// Planar shape a control polygon is sampled from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// `x = a cos t`, `y = b sin t`
    Ellipse { a: f64, b: f64 },
    /// Figure-eight reaching `x = +-size`
    Lemniscate { size: f64 },
}

impl Shape {
    /// The shape centered on the origin, before display scaling.
    pub fn curve(&self) -> Box<dyn Curve> {
        match *self {
            Shape::Ellipse { a, b } => Box::new(Ellipse::new(Point3::ZERO, a, b)),
            Shape::Lemniscate { size } => Box::new(Lemniscate::new(Point3::ZERO, size)),
        }
    }

    fn parameters(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Shape::Ellipse { a, b } => vec![("a", a), ("b", b)],
            Shape::Lemniscate { size } => vec![("size", size)],
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Ellipse { a: 2.0, b: 1.0 }
    }
}

/// Parameters of the control polygon generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolygonSettings {
    pub shape: Shape,
    /// Number of points sampled from the shape, before the closing duplicate.
    pub point_count: usize,
    /// Display scale applied to every sampled point.
    pub scale: f64,
    /// Offset along Y applied after scaling.
    pub vertical_offset: f64,
}

impl Default for PolygonSettings {
    fn default() -> Self {
        Self {
            shape: Shape::default(),
            point_count: 20,
            scale: 1.0,
            vertical_offset: 0.0,
        }
    }
}

impl Validate for PolygonSettings {
    fn validate(&self) -> Result<()> {
        if self.point_count < 2 {
            return Err(OrbitError::invalid_config(format!(
                "control polygon needs at least 2 points, got {}",
                self.point_count
            )));
        }
        let mut values = self.shape.parameters();
        values.push(("scale", self.scale));
        values.push(("vertical offset", self.vertical_offset));
        for (name, value) in values {
            if !value.is_finite() {
                return Err(OrbitError::invalid_config(format!(
                    "shape parameter {} must be finite, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Ordered control points whose last point repeats the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPolygon {
    points: Vec<Point3>,
}

impl ControlPolygon {
    /// Sample the configured shape and close the loop.
    ///
    /// Produces `point_count + 1` points: one revolution sampled with step
    /// `2*PI / (point_count - 1)`, followed by a copy of the first point.
    pub fn generate(settings: &PolygonSettings) -> Result<Self> {
        settings.validate()?;

        let curve = settings.shape.curve();
        let offset = Vector3::new(0.0, settings.vertical_offset, 0.0);
        let mut polygon = Self::sample(curve.as_ref(), settings.point_count)?;
        for p in &mut polygon.points {
            *p = *p * settings.scale + offset;
        }
        log::debug!(
            "generated {:?} control polygon with {} points",
            settings.shape,
            polygon.len()
        );
        Ok(polygon)
    }

    /// Sample `count` points over the curve domain and append the first one.
    pub fn sample(curve: &dyn Curve, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(OrbitError::invalid_config(format!(
                "control polygon needs at least 2 points, got {}",
                count
            )));
        }
        let mut points = crate::sample::sample_uniform(curve, count - 1);
        points.push(points[0]);
        Ok(Self { points })
    }

    /// Wrap points as they are; closure is the caller's responsibility.
    pub fn from_points(points: Vec<Point3>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the last point is exactly the first one.
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Cubic segments over groups of four points, advancing by three.
    ///
    /// Consecutive segments share an end point. Trailing points that do not
    /// complete a group are left out.
    pub fn segments(&self) -> impl Iterator<Item = CubicBezier> + '_ {
        self.points
            .windows(4)
            .step_by(3)
            .map(|w| CubicBezier::new([w[0], w[1], w[2], w[3]]))
    }

    pub fn segment_count(&self) -> usize {
        if self.points.len() < 4 {
            0
        } else {
            (self.points.len() - 4) / 3 + 1
        }
    }
}

impl BoundingBox for ControlPolygon {
    type Point = Point3;

    fn bounding_box(&self) -> Option<(Point3, Point3)> {
        Aabb3::from_points(&self.points).map(|aabb| (aabb.min, aabb.max))
    }
}
