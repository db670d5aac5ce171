//! Uniform parameter sampling of curves.

use orbit_math::Point3;

use crate::curve::Curve;

/// Sample a curve at `divisions + 1` evenly spaced parameters covering its
/// whole domain, both ends included.
///
/// Parameters are computed as `t_min + i * step` so that every sample is
/// reproducible from its index alone.
///
/// # Arguments
/// * `curve` - The curve to sample
/// * `divisions` - Number of equal parameter intervals, must be non-zero
///
/// # Returns
/// A vector of `divisions + 1` points, or no points when `divisions == 0`.
pub fn sample_uniform(curve: &dyn Curve, divisions: usize) -> Vec<Point3> {
    if divisions == 0 {
        return Vec::new();
    }

    let (t_min, t_max) = curve.domain();
    let step = (t_max - t_min) / divisions as f64;
    (0..=divisions)
        .map(|i| curve.point_at(t_min + i as f64 * step))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::{Ellipse, Line};
    use orbit_math::DVec3;

    #[test]
    fn test_sample_line_counts() {
        let line = Line::new(DVec3::ZERO, DVec3::new(10.0, 0.0, 0.0));
        let points = sample_uniform(&line, 4);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], DVec3::ZERO);
        assert!((points[2] - DVec3::new(5.0, 0.0, 0.0)).length() < 1e-12);
        assert!((points[4] - DVec3::new(10.0, 0.0, 0.0)).length() < 1e-12);
    }

    #[test]
    fn test_sample_zero_divisions() {
        let line = Line::new(DVec3::ZERO, DVec3::X);
        assert!(sample_uniform(&line, 0).is_empty());
    }

    #[test]
    fn test_sample_closed_curve_revisits_start() {
        let ellipse = Ellipse::new(DVec3::ZERO, 2.0, 1.0);
        let points = sample_uniform(&ellipse, 8);
        assert_eq!(points.len(), 9);
        assert!((points[0] - points[8]).length() < 1e-12);
    }
}
