//! Cylindrical surface.

use std::f64::consts::PI;

use surfgrid_core::{Result, SurfError};
use surfgrid_math::{DVec3, Point3, Vector3};

use super::{CoordMode, Domain, Surface};

/// A cylindrical surface parameterized by angle `u` in `[0, 2*PI]` and height `v`.
///
/// Points are computed as:
/// `P(u, v) = origin + radius * (cos(u) * ref_dir + sin(u) * cross_dir) + v * axis`
#[derive(Debug, Clone)]
pub struct CylindricalSurface {
    origin: Point3,
    axis: Vector3,
    radius: f64,
    domain: Domain,
}

impl CylindricalSurface {
    /// Fails unless `radius` is positive, `height` spans a non-empty range and
    /// `axis` has a direction.
    pub fn new(origin: Point3, axis: Vector3, radius: f64, height: f64) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SurfError::InvalidDomain(format!(
                "cylinder radius {} is not positive",
                radius
            )));
        }
        let axis = axis.try_normalize().ok_or_else(|| {
            SurfError::InvalidDomain(format!("cylinder axis {} has no direction", axis))
        })?;
        let domain = Domain::new(0.0, 2.0 * PI, 0.0, height)?;
        Ok(Self {
            origin,
            axis,
            radius,
            domain,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn height(&self) -> f64 {
        self.domain.v_max
    }

    fn local_frame(&self) -> (DVec3, DVec3) {
        let n = self.axis;
        let ref_vec = if n.x.abs() < 0.9 { DVec3::X } else { DVec3::Y };
        let u = n.cross(ref_vec).normalize();
        let v = n.cross(u).normalize();
        (u, v)
    }
}

impl Surface for CylindricalSurface {
    fn coord_mode(&self) -> CoordMode {
        CoordMode::GeneralUv
    }

    fn domain(&self) -> Domain {
        self.domain
    }

    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (ref_dir, cross_dir) = self.local_frame();
        self.origin + self.radius * (u.cos() * ref_dir + u.sin() * cross_dir) + v * self.axis
    }

    fn evaluate_array(&self, us: &[f64], vs: &[f64]) -> Result<Vec<Point3>> {
        if us.len() != vs.len() {
            return Err(SurfError::LengthMismatch {
                u_len: us.len(),
                v_len: vs.len(),
            });
        }
        // frame is constant over the batch
        let (ref_dir, cross_dir) = self.local_frame();
        Ok(us
            .iter()
            .zip(vs)
            .map(|(&u, &v)| {
                self.origin + self.radius * (u.cos() * ref_dir + u.sin() * cross_dir) + v * self.axis
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cylindrical_point_on_cylinder() {
        let cyl = CylindricalSurface::new(DVec3::ZERO, DVec3::Z, 2.0, 1.0).unwrap();

        for i in 0..8 {
            let u = i as f64 * PI / 4.0;
            let p = cyl.point_at(u, 0.0);
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert_relative_eq!(r, 2.0, epsilon = 1e-10);
            assert!(p.z.abs() < 1e-10);
        }
    }

    #[test]
    fn test_cylindrical_height() {
        let cyl = CylindricalSurface::new(DVec3::ZERO, DVec3::Z, 1.0, 5.0).unwrap();
        let p = cyl.point_at(0.0, 5.0);
        assert_relative_eq!(p.z, 5.0, epsilon = 1e-10);
        assert_eq!(cyl.height(), 5.0);
        assert_eq!(cyl.domain(), Domain::new(0.0, 2.0 * PI, 0.0, 5.0).unwrap());
    }

    #[test]
    fn test_batch_matches_pointwise() {
        let cyl = CylindricalSurface::new(DVec3::new(1.0, 2.0, 3.0), DVec3::X, 0.5, 2.0).unwrap();
        let us = [0.0, 1.0, 2.5];
        let vs = [0.0, 0.5, 2.0];
        let batch = cyl.evaluate_array(&us, &vs).unwrap();
        for ((u, v), p) in us.iter().zip(&vs).zip(&batch) {
            assert!((cyl.point_at(*u, *v) - *p).length() < 1e-12);
        }
    }

    #[test]
    fn test_invalid_dimensions_rejected() {
        for height in [0.0, -1.0, f64::NAN] {
            let err = CylindricalSurface::new(DVec3::ZERO, DVec3::Z, 1.0, height).unwrap_err();
            assert!(matches!(err, SurfError::InvalidDomain(_)));
        }
        assert!(CylindricalSurface::new(DVec3::ZERO, DVec3::Z, 0.0, 1.0).is_err());
        assert!(CylindricalSurface::new(DVec3::ZERO, DVec3::ZERO, 1.0, 1.0).is_err());

        let cyl = CylindricalSurface::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 3.0), 1.5, 1.0).unwrap();
        assert_eq!(cyl.radius(), 1.5);
        assert_eq!(cyl.point_at(0.0, 1.0).z, 1.0);
    }
}
