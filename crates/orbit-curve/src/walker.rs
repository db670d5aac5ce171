//! Per-tick traversal of a sampled path.

use orbit_core::{OrbitError, Result};
use orbit_math::Point3;
use serde::{Deserialize, Serialize};

use crate::path::CurvePath;

/// Index of the next sample an animated object will move to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathCursor(usize);

impl PathCursor {
    pub const START: PathCursor = PathCursor(0);

    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Anything whose position can be driven along a path.
pub trait PathFollower {
    fn move_to(&mut self, position: Point3);
}

impl PathFollower for Point3 {
    fn move_to(&mut self, position: Point3) {
        *self = position;
    }
}

/// Move `object` to the sample under `cursor` and return the next cursor.
///
/// The returned cursor wraps to the start after the last sample. A cursor
/// left past the end by a shorter rebuilt path is wrapped before use.
pub fn advance<F>(object: &mut F, path: &CurvePath, cursor: PathCursor) -> Result<PathCursor>
where
    F: PathFollower + ?Sized,
{
    let points = path.points();
    if points.is_empty() {
        return Err(OrbitError::EmptyPath);
    }

    let index = cursor.index() % points.len();
    object.move_to(points[index]);
    Ok(PathCursor((index + 1) % points.len()))
}
