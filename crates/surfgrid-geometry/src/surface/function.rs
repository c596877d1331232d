//! Closure-backed surfaces.

use std::fmt;
use std::sync::Arc;

use surfgrid_core::{Result, SurfError};
use surfgrid_math::{Axis, Placement, Point3};

use super::{CoordMode, Domain, Surface};

type PointFn = Arc<dyn Fn(f64, f64) -> Point3 + Send + Sync>;

/// A surface defined by a user closure.
///
/// [`FunctionSurface::planar`] builds a `z = f(x, y)` height field whose raw
/// output is `(x, y, f(x, y))`; the sampler then remaps axes by
/// [`Surface::input_orientation`] and applies the optional placement.
/// [`FunctionSurface::general`] wraps an arbitrary `(u, v) -> (x, y, z)` map.
#[derive(Clone)]
pub struct FunctionSurface {
    mode: CoordMode,
    domain: Domain,
    orientation: Axis,
    placement: Option<Placement>,
    func: PointFn,
}

impl FunctionSurface {
    pub fn planar<F>(domain: Domain, height: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            mode: CoordMode::PlanarFunction,
            domain,
            orientation: Axis::Z,
            placement: None,
            func: Arc::new(move |x, y| Point3::new(x, y, height(x, y))),
        }
    }

    pub fn general<F>(domain: Domain, map: F) -> Self
    where
        F: Fn(f64, f64) -> Point3 + Send + Sync + 'static,
    {
        Self {
            mode: CoordMode::GeneralUv,
            domain,
            orientation: Axis::Z,
            placement: None,
            func: Arc::new(map),
        }
    }

    pub fn with_orientation(mut self, orientation: Axis) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }
}

impl fmt::Debug for FunctionSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionSurface")
            .field("mode", &self.mode)
            .field("domain", &self.domain)
            .field("orientation", &self.orientation)
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

impl Surface for FunctionSurface {
    fn coord_mode(&self) -> CoordMode {
        self.mode
    }

    fn domain(&self) -> Domain {
        self.domain
    }

    fn input_orientation(&self) -> Axis {
        self.orientation
    }

    fn placement(&self) -> Option<Placement> {
        self.placement
    }

    fn point_at(&self, u: f64, v: f64) -> Point3 {
        (self.func)(u, v)
    }

    fn evaluate_array(&self, us: &[f64], vs: &[f64]) -> Result<Vec<Point3>> {
        if us.len() != vs.len() {
            return Err(SurfError::LengthMismatch {
                u_len: us.len(),
                v_len: vs.len(),
            });
        }
        let mut points = Vec::with_capacity(us.len());
        for (i, (&u, &v)) in us.iter().zip(vs).enumerate() {
            let p = (self.func)(u, v);
            if !p.is_finite() {
                return Err(SurfError::Evaluation(format!(
                    "non-finite point {:?} at sample {} (u={}, v={})",
                    p, i, u, v
                )));
            }
            points.push(p);
        }
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surfgrid_math::DVec3;

    #[test]
    fn test_planar_height_field() {
        let s = FunctionSurface::planar(Domain::unit(), |x, y| x * y);
        assert_eq!(s.coord_mode(), CoordMode::PlanarFunction);
        assert_eq!(s.point_at(2.0, 3.0), DVec3::new(2.0, 3.0, 6.0));
    }

    #[test]
    fn test_general_map() {
        let s = FunctionSurface::general(Domain::unit(), |u, v| DVec3::new(u, v, 0.0));
        assert_eq!(s.coord_mode(), CoordMode::GeneralUv);
        let pts = s.evaluate_array(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]).unwrap();
        assert_eq!(
            pts,
            vec![
                DVec3::new(0.0, 5.0, 0.0),
                DVec3::new(1.0, 6.0, 0.0),
                DVec3::new(2.0, 7.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_metadata_builders() {
        let placement = Placement::from_translation(DVec3::ONE);
        let s = FunctionSurface::planar(Domain::unit(), |_, _| 0.0)
            .with_orientation(Axis::X)
            .with_placement(placement);
        assert_eq!(s.input_orientation(), Axis::X);
        assert!(s.has_placement());
        assert_eq!(s.placement(), Some(placement));
    }

    #[test]
    fn test_non_finite_output_is_an_evaluation_error() {
        let s = FunctionSurface::planar(Domain::unit(), |x, _| 1.0 / x);
        let err = s.evaluate_array(&[1.0, 0.0], &[0.0, 0.0]).unwrap_err();
        assert!(matches!(err, SurfError::Evaluation(_)));
    }
}
