//! The surface capability and its backends.

mod cylindrical;
mod function;
mod planar;
mod spherical;

use serde::{Deserialize, Serialize};
use surfgrid_core::traits::Validate;
use surfgrid_core::{Result, SurfError};
use surfgrid_math::{Axis, Placement, Point3};

pub use cylindrical::CylindricalSurface;
pub use function::FunctionSurface;
pub use planar::PlaneSurface;
pub use spherical::SphericalSurface;

/// Convention a surface was authored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CoordMode {
    /// `z = f(x, y)`: the parameters are literally X and Y.
    #[default]
    PlanarFunction,
    /// Independent `(u, v)` parameters mapped to `(x, y, z)`.
    GeneralUv,
}

impl std::fmt::Display for CoordMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordMode::PlanarFunction => write!(f, "XY -> Z"),
            CoordMode::GeneralUv => write!(f, "UV -> XYZ"),
        }
    }
}

/// Rectangular parameter domain `[u_min, u_max] x [v_min, v_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub u_min: f64,
    pub u_max: f64,
    pub v_min: f64,
    pub v_max: f64,
}

impl Domain {
    pub fn new(u_min: f64, u_max: f64, v_min: f64, v_max: f64) -> Result<Self> {
        let domain = Self {
            u_min,
            u_max,
            v_min,
            v_max,
        };
        domain.validate()?;
        Ok(domain)
    }

    pub fn unit() -> Self {
        Self {
            u_min: 0.0,
            u_max: 1.0,
            v_min: 0.0,
            v_max: 1.0,
        }
    }
}

impl Validate for Domain {
    fn validate(&self) -> Result<()> {
        let bounds = [self.u_min, self.u_max, self.v_min, self.v_max];
        if bounds.iter().any(|b| !b.is_finite()) {
            return Err(SurfError::InvalidDomain(format!(
                "non-finite bounds {:?}",
                bounds
            )));
        }
        if self.u_min >= self.u_max {
            return Err(SurfError::InvalidDomain(format!(
                "u range [{}, {}] is empty",
                self.u_min, self.u_max
            )));
        }
        if self.v_min >= self.v_max {
            return Err(SurfError::InvalidDomain(format!(
                "v range [{}, {}] is empty",
                self.v_min, self.v_max
            )));
        }
        Ok(())
    }
}

/// Parametric surface as consumed by the sampler.
///
/// Backends implement [`Surface::point_at`]; batch evaluation defaults to
/// mapping it over paired parameter slices. Backends that can fail override
/// [`Surface::evaluate_array`].
pub trait Surface: Send + Sync {
    /// Convention this surface was authored under.
    fn coord_mode(&self) -> CoordMode;

    /// Parameter domain the default grid spans.
    fn domain(&self) -> Domain;

    /// World axis the surface's height axis maps from. Only consulted for
    /// planar-function evaluation.
    fn input_orientation(&self) -> Axis {
        Axis::Z
    }

    /// Optional affine placement applied after the axis permutation.
    fn placement(&self) -> Option<Placement> {
        None
    }

    fn has_placement(&self) -> bool {
        self.placement().is_some()
    }

    /// Evaluate the surface at parameters `(u, v)`.
    fn point_at(&self, u: f64, v: f64) -> Point3;

    /// Evaluate equal-length parameter slices. Empty input yields an empty batch.
    fn evaluate_array(&self, us: &[f64], vs: &[f64]) -> Result<Vec<Point3>> {
        if us.len() != vs.len() {
            return Err(SurfError::LengthMismatch {
                u_len: us.len(),
                v_len: vs.len(),
            });
        }
        Ok(us
            .iter()
            .zip(vs)
            .map(|(&u, &v)| self.point_at(u, v))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surfgrid_math::DVec3;

    #[test]
    fn test_domain_rejects_empty_range() {
        assert!(Domain::new(1.0, 1.0, 0.0, 1.0).is_err());
        assert!(Domain::new(0.0, 1.0, 2.0, -2.0).is_err());
    }

    #[test]
    fn test_domain_rejects_non_finite() {
        let err = Domain::new(0.0, f64::INFINITY, 0.0, 1.0).unwrap_err();
        assert!(matches!(err, SurfError::InvalidDomain(_)));
        assert!(Domain::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_domain_keeps_bounds() {
        let d = Domain::new(-1.0, 1.0, 0.0, 2.0).unwrap();
        assert_eq!((d.u_min, d.u_max, d.v_min, d.v_max), (-1.0, 1.0, 0.0, 2.0));
        Domain::unit().validate().unwrap();
    }

    #[test]
    fn test_default_evaluate_array() {
        let plane = PlaneSurface::xy(Domain::unit());
        let pts = plane.evaluate_array(&[0.0, 1.0], &[0.5, 0.25]).unwrap();
        assert_eq!(pts, vec![DVec3::new(0.0, 0.5, 0.0), DVec3::new(1.0, 0.25, 0.0)]);
    }

    #[test]
    fn test_default_evaluate_array_empty() {
        let plane = PlaneSurface::xy(Domain::unit());
        assert!(plane.evaluate_array(&[], &[]).unwrap().is_empty());
    }

    #[test]
    fn test_default_evaluate_array_mismatch() {
        let plane = PlaneSurface::xy(Domain::unit());
        let err = plane.evaluate_array(&[0.0, 1.0], &[0.0]).unwrap_err();
        assert!(matches!(
            err,
            SurfError::LengthMismatch { u_len: 2, v_len: 1 }
        ));
    }

    #[test]
    fn test_default_metadata() {
        let plane = PlaneSurface::xy(Domain::unit());
        assert_eq!(plane.input_orientation(), Axis::Z);
        assert!(!plane.has_placement());
    }
}
