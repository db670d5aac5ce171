use orbit_math::{Aabb3, DMat4, Point3, Vector3};

/// Squared length below which a direction is treated as degenerate.
const DEGENERATE_EPS: f64 = 1e-24;

/// Closest distance `fit_to_aabb` backs off from a flat or empty box.
const MIN_FIT_DISTANCE: f64 = 1.0;

/// A 3D perspective camera with look-at controls.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub eye: Point3,
    pub target: Point3,
    pub up: Vector3,
    /// Vertical field of view in degrees
    pub fov_y: f64,
    /// Width over height
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera {
    /// Create a camera looking from `eye` at `target` with `+Y` up.
    pub fn new(eye: Point3, target: Point3, fov_y: f64, near: f64, far: f64) -> Self {
        Self {
            eye,
            target,
            up: Vector3::Y,
            fov_y,
            aspect: 16.0 / 9.0,
            near,
            far,
        }
    }

    /// Eye at (0, 0, 5), looking at origin, 45° FOV, 16:9 aspect.
    pub fn default() -> Self {
        Self::new(Point3::new(0.0, 0.0, 5.0), Point3::ZERO, 45.0, 0.1, 100.0)
    }

    pub fn set_aspect(&mut self, width: f64, height: f64) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Unit viewing direction, `None` while the eye sits on the target.
    pub fn direction(&self) -> Option<Vector3> {
        let forward = self.target - self.eye;
        if forward.length_squared() < DEGENERATE_EPS {
            return None;
        }
        forward.try_normalize()
    }

    /// Right-handed look-at view matrix.
    ///
    /// An eye on the target yields the identity. Looking along `up` picks
    /// another up axis orthogonal to the view direction.
    pub fn view_matrix(&self) -> DMat4 {
        let Some(forward) = self.direction() else {
            return DMat4::IDENTITY;
        };
        let up = match self.up.try_normalize() {
            Some(up) if forward.cross(up).length_squared() >= DEGENERATE_EPS => up,
            _ => forward.any_orthonormal_vector(),
        };
        DMat4::look_to_rh(self.eye, forward, up)
    }

    /// Perspective projection with OpenGL-style `[-1, 1]` depth.
    pub fn projection_matrix(&self) -> DMat4 {
        DMat4::perspective_rh_gl(self.fov_y.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Place the camera so that an AABB fills the view, keeping the
    /// current view direction (or looking down `-Z` if there is none).
    pub fn fit_to_aabb(&mut self, aabb: &Aabb3) {
        let center = aabb.center();
        let size = aabb.extents();
        let max_dim = size.x.max(size.y).max(size.z);

        let fit = max_dim / (2.0 * (self.fov_y.to_radians() / 2.0).tan());
        // 1.5x for padding
        let distance = (fit * 1.5).max(MIN_FIT_DISTANCE);

        let view_dir = self.direction().unwrap_or(Vector3::NEG_Z);
        self.target = center;
        self.eye = center - view_dir * distance;
    }
}
