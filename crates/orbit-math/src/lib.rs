pub mod aabb;
pub mod basis;
pub mod transform;

pub use glam::{DMat4, DVec3, DVec4};
pub use aabb::Aabb3;
pub use basis::BasisMatrix;
pub use transform::Transform;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
