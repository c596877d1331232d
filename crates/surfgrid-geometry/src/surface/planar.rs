//! Planar surface.

use surfgrid_math::{DVec3, Point3, Vector3};

use super::{CoordMode, Domain, Surface};

/// A bounded plane parameterized by `origin + u * u_axis + v * v_axis`.
#[derive(Debug, Clone)]
pub struct PlaneSurface {
    pub origin: Point3,
    pub u_axis: Vector3,
    pub v_axis: Vector3,
    pub domain: Domain,
}

impl PlaneSurface {
    pub fn new(origin: Point3, u_axis: Vector3, v_axis: Vector3, domain: Domain) -> Self {
        Self {
            origin,
            u_axis,
            v_axis,
            domain,
        }
    }

    /// XY plane through the origin.
    pub fn xy(domain: Domain) -> Self {
        Self::new(DVec3::ZERO, DVec3::X, DVec3::Y, domain)
    }
}

impl Surface for PlaneSurface {
    fn coord_mode(&self) -> CoordMode {
        CoordMode::GeneralUv
    }

    fn domain(&self) -> Domain {
        self.domain
    }

    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.origin + u * self.u_axis + v * self.v_axis
    }
}
