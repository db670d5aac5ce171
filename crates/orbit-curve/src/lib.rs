//! Orbit curves: control polygons, cubic Bezier paths, and path walking.

pub mod curve;
pub mod path;
pub mod polygon;
pub mod sample;
pub mod settings;
pub mod walker;

pub use curve::Curve;
pub use path::{CurvePath, PathSettings};
pub use polygon::{ControlPolygon, PolygonSettings, Shape};
pub use settings::CurveSettings;
pub use walker::{advance, PathCursor, PathFollower};
