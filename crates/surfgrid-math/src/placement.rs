use crate::{DMat3, DMat4, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Affine placement carried by a surface: a 3x3 rotation-scale block and a translation.
///
/// Applied to sampled points as `matrix * (p - translation)`, in two passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub matrix: DMat3,
    pub translation: Vector3,
}

impl Placement {
    pub fn identity() -> Self {
        Self::new(DMat3::IDENTITY, Vector3::ZERO)
    }

    pub fn new(matrix: DMat3, translation: Vector3) -> Self {
        Self {
            matrix,
            translation,
        }
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::new(DMat3::IDENTITY, t)
    }

    /// Split a 4x4 affine matrix into its upper 3x3 block and translation column.
    pub fn from_mat4(m: DMat4) -> Self {
        Self::new(DMat3::from_mat4(m), m.w_axis.truncate())
    }

    /// First pass: subtract the translation from every point.
    pub fn subtract_translation(&self, points: &mut [Point3]) {
        for p in points.iter_mut() {
            *p -= self.translation;
        }
    }

    /// Second pass: apply the 3x3 block to every point as a linear map.
    pub fn apply_linear(&self, points: &mut [Point3]) {
        for p in points.iter_mut() {
            *p = self.matrix * *p;
        }
    }
}

impl Default for Placement {
    fn default() -> Self {
        Self::identity()
    }
}
