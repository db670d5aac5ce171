use crate::{DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Placement of a scene object: translation, Euler rotation in degrees, scale.
///
/// The model matrix is composed as `T * Rx * Ry * Rz * S`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Point3,
    /// Rotation about X, Y and Z in degrees.
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Point3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self {
            position: t,
            ..Self::identity()
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_translation(self.position)
            * DMat4::from_rotation_x(self.rotation.x.to_radians())
            * DMat4::from_rotation_y(self.rotation.y.to_radians())
            * DMat4::from_rotation_z(self.rotation.z.to_radians())
            * DMat4::from_scale(self.scale)
    }

    /// Inverse-transpose of the model matrix, used to transform normals.
    ///
    /// Returns `None` when a scale component collapses the matrix.
    pub fn normal_matrix(&self) -> Option<DMat4> {
        let m = self.to_mat4();
        if m.determinant().abs() < 1e-15 {
            None
        } else {
            Some(m.inverse().transpose())
        }
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
