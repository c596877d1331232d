//! Spherical surface.

use std::f64::consts::{FRAC_PI_2, PI};

use surfgrid_math::{DVec3, Point3};

use super::{CoordMode, Domain, Surface};

/// A spherical surface parameterized by longitude `u` in `[0, 2*PI]` and
/// latitude `v` in `[-PI/2, PI/2]`.
///
/// `P(u, v) = center + radius * (cos(v)*cos(u), cos(v)*sin(u), sin(v))`
#[derive(Debug, Clone)]
pub struct SphericalSurface {
    pub center: Point3,
    pub radius: f64,
}

impl SphericalSurface {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Surface for SphericalSurface {
    fn coord_mode(&self) -> CoordMode {
        CoordMode::GeneralUv
    }

    fn domain(&self) -> Domain {
        Domain {
            u_min: 0.0,
            u_max: 2.0 * PI,
            v_min: -FRAC_PI_2,
            v_max: FRAC_PI_2,
        }
    }

    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let x = self.radius * v.cos() * u.cos();
        let y = self.radius * v.cos() * u.sin();
        let z = self.radius * v.sin();
        self.center + DVec3::new(x, y, z)
    }
}
