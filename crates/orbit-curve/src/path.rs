//! Dense sampled paths built from cubic Bezier control polygons.

use orbit_core::traits::{BoundingBox, Validate};
use orbit_core::{OrbitError, Result, Tolerance};
use orbit_math::{Aabb3, Point3};
use serde::{Deserialize, Serialize};

use crate::curve::Line;
use crate::polygon::ControlPolygon;
use crate::sample::sample_uniform;

/// Sampling density of a [`CurvePath`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Parameter intervals per segment; each segment yields one more sample.
    pub samples_per_segment: usize,
    /// Points bridging the last sample back to the first.
    pub smoothing_points: usize,
}

impl PathSettings {
    pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 100;
    pub const DEFAULT_SMOOTHING_POINTS: usize = 20;
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            samples_per_segment: Self::DEFAULT_SAMPLES_PER_SEGMENT,
            smoothing_points: Self::DEFAULT_SMOOTHING_POINTS,
        }
    }
}

impl Validate for PathSettings {
    fn validate(&self) -> Result<()> {
        if self.samples_per_segment == 0 {
            return Err(OrbitError::invalid_config(
                "samples per segment must be positive",
            ));
        }
        Ok(())
    }
}

/// Ordered points sampled along a closed piecewise cubic Bezier curve.
///
/// Immutable once built; rebuild it when the polygon or density changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePath {
    points: Vec<Point3>,
}

impl CurvePath {
    /// Sample every segment of `polygon`, then bridge back to the start.
    ///
    /// Each segment contributes `samples_per_segment + 1` points with `t`
    /// running over `[0, 1]`, so shared segment end points appear twice.
    /// A polygon with fewer than four points yields an empty path.
    pub fn build(polygon: &ControlPolygon, settings: &PathSettings) -> Result<Self> {
        settings.validate()?;

        let mut points =
            Vec::with_capacity(polygon.segment_count() * (settings.samples_per_segment + 1));
        for segment in polygon.segments() {
            points.extend(sample_uniform(&segment, settings.samples_per_segment));
        }

        if points.is_empty() {
            log::warn!(
                "control polygon with {} points has no cubic segment, path is empty",
                polygon.len()
            );
            return Ok(Self { points });
        }

        let sampled = points.len();
        let bridge = Line::new(points[sampled - 1], points[0]);
        points.extend(
            sample_uniform(&bridge, settings.smoothing_points)
                .into_iter()
                .skip(1),
        );

        log::debug!(
            "built curve path: {} segments, {} samples, {} bridging points",
            polygon.segment_count(),
            sampled,
            points.len() - sampled
        );
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<Point3> {
        self.points.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distance between the last and the first point.
    pub fn closure_gap(&self) -> Option<f64> {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => Some((*last - *first).length()),
            _ => None,
        }
    }

    /// Whether the path ends where it starts, within `tolerance`.
    pub fn is_closed_within(&self, tolerance: Tolerance) -> bool {
        self.closure_gap().is_some_and(|gap| tolerance.is_zero(gap))
    }
}

impl BoundingBox for CurvePath {
    type Point = Point3;

    fn bounding_box(&self) -> Option<(Point3, Point3)> {
        Aabb3::from_points(&self.points).map(|aabb| (aabb.min, aabb.max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polygon::PolygonSettings;
    use orbit_math::DVec3;

    fn line_polygon(count: usize) -> ControlPolygon {
        ControlPolygon::from_points(
            (0..count)
                .map(|i| DVec3::new(i as f64, (i % 2) as f64, 0.0))
                .collect(),
        )
    }

    #[test]
    fn test_two_segment_lengths() {
        let polygon = line_polygon(7);
        let without_bridge = CurvePath::build(
            &polygon,
            &PathSettings {
                samples_per_segment: 10,
                smoothing_points: 0,
            },
        )
        .unwrap();
        assert_eq!(without_bridge.len(), 22);

        let path = CurvePath::build(
            &polygon,
            &PathSettings {
                samples_per_segment: 10,
                smoothing_points: 20,
            },
        )
        .unwrap();
        assert_eq!(path.len(), 42);
        assert_eq!(&path.points()[..22], without_bridge.points());
    }

    #[test]
    fn test_segments_start_and_end_on_control_points() {
        let polygon = line_polygon(7);
        let path = CurvePath::build(
            &polygon,
            &PathSettings {
                samples_per_segment: 10,
                smoothing_points: 0,
            },
        )
        .unwrap();
        let cp = polygon.points();
        assert_eq!(path.points()[0], cp[0]);
        assert_eq!(path.points()[10], cp[3]);
        assert_eq!(path.points()[11], cp[3]);
        assert_eq!(path.points()[21], cp[6]);
    }

    #[test]
    fn test_bridge_runs_back_to_start() {
        let polygon = line_polygon(7);
        let path = CurvePath::build(&polygon, &PathSettings {
            samples_per_segment: 10,
            smoothing_points: 4,
        })
        .unwrap();
        assert_eq!(path.len(), 26);

        let last_sample = path.points()[21];
        let first = path.points()[0];
        for (j, p) in path.points()[22..].iter().enumerate() {
            let u = (j + 1) as f64 / 4.0;
            let expected = last_sample + (first - last_sample) * u;
            assert!((*p - expected).length() < 1e-12);
        }
        assert!(path.is_closed_within(Tolerance::default()));
    }

    #[test]
    fn test_degenerate_polygon_gives_empty_path() {
        let polygon = line_polygon(3);
        let path = CurvePath::build(&polygon, &PathSettings::default()).unwrap();
        assert!(path.is_empty());
        assert!(path.closure_gap().is_none());
        assert!(!path.is_closed_within(Tolerance::loose()));
        assert!(path.bounding_box().is_none());
    }

    #[test]
    fn test_zero_density_rejected() {
        let polygon = line_polygon(7);
        let err = CurvePath::build(
            &polygon,
            &PathSettings {
                samples_per_segment: 0,
                smoothing_points: 20,
            },
        )
        .unwrap_err();
        assert!(matches!(err, OrbitError::InvalidConfig(_)));
    }

    #[test]
    fn test_build_is_deterministic() {
        let polygon = ControlPolygon::generate(&PolygonSettings::default()).unwrap();
        let settings = PathSettings::default();
        let a = CurvePath::build(&polygon, &settings).unwrap();
        let b = CurvePath::build(&polygon, &settings).unwrap();
        assert_eq!(a.len(), b.len());
        for (p, q) in a.points().iter().zip(b.points()) {
            assert_eq!(p.to_array().map(f64::to_bits), q.to_array().map(f64::to_bits));
        }
    }

    #[test]
    fn test_default_ellipse_path_size() {
        // 21 control points -> 6 segments of 101 samples, plus 20 bridging points
        let polygon = ControlPolygon::generate(&PolygonSettings::default()).unwrap();
        let path = CurvePath::build(&polygon, &PathSettings::default()).unwrap();
        assert_eq!(polygon.segment_count(), 6);
        assert_eq!(path.len(), 6 * 101 + 20);

        let (min, max) = path.bounding_box().unwrap();
        assert!(min.x >= -2.0 - 1e-9 && max.x <= 2.0 + 1e-9);
        assert!(min.y >= -1.0 - 1e-9 && max.y <= 1.0 + 1e-9);
    }
}
