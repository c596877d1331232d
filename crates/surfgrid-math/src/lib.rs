pub mod aabb;
pub mod axis;
pub mod placement;

pub use glam::{DMat3, DMat4, DVec3};
pub use aabb::Aabb3;
pub use axis::{Axis, ParamPlane};
pub use placement::Placement;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
