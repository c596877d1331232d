//! Axis conventions: output-axis permutation and parameter-plane projection.

use crate::Point3;
use serde::{Deserialize, Serialize};

/// World axis a planar-function surface takes as its "height" axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    /// Remap the raw output columns of a planar-function surface.
    ///
    /// * `X`: `(x, y, z) -> (y, z, x)`
    /// * `Y`: `(x, y, z) -> (z, x, y)`
    /// * `Z`: identity
    pub fn permute(self, p: Point3) -> Point3 {
        match self {
            Axis::X => Point3::new(p.y, p.z, p.x),
            Axis::Y => Point3::new(p.z, p.x, p.y),
            Axis::Z => p,
        }
    }
}

/// Canonical plane used to read `(u, v)` parameters off 3D vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ParamPlane {
    #[default]
    XY,
    YZ,
    XZ,
}

impl ParamPlane {
    /// Project a vertex onto this plane's two in-plane coordinates.
    pub fn project(self, p: Point3) -> (f64, f64) {
        match self {
            ParamPlane::XY => (p.x, p.y),
            ParamPlane::YZ => (p.y, p.z),
            ParamPlane::XZ => (p.x, p.z),
        }
    }
}
