//! Regular parameter grids over a surface domain.

use serde::{Deserialize, Serialize};
use surfgrid_core::traits::Validate;
use surfgrid_core::{Result, SurfError};

use crate::surface::Domain;

/// Fewest samples per axis that still form a face.
pub const MIN_SAMPLES: usize = 3;

/// Sample count used when the caller supplies none.
pub const DEFAULT_SAMPLES: usize = 25;

/// Largest grid whose point indices fit in `u32`.
const MAX_GRID_POINTS: usize = u32::MAX as usize;

/// `num` evenly spaced values from `start` to `stop`, both inclusive.
///
/// The last value is exactly `stop`. `num == 1` yields `[start]`.
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Sample counts of a regular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub samples_u: usize,
    pub samples_v: usize,
}

impl GridSpec {
    pub fn new(samples_u: usize, samples_v: usize) -> Result<Self> {
        let spec = Self {
            samples_u,
            samples_v,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Saturates instead of overflowing; `validate` rejects anything that large.
    pub fn point_count(&self) -> usize {
        self.samples_u.saturating_mul(self.samples_v)
    }

    /// Row-major parameter pairs over `domain`.
    ///
    /// Index `r * samples_u + c` holds `(u[c], v[r])`: columns vary fastest.
    pub fn parameters(&self, domain: &Domain) -> (Vec<f64>, Vec<f64>) {
        let u_values = linspace(domain.u_min, domain.u_max, self.samples_u);
        let v_values = linspace(domain.v_min, domain.v_max, self.samples_v);

        let n = self.point_count();
        let mut us = Vec::with_capacity(n);
        let mut vs = Vec::with_capacity(n);
        for &v in &v_values {
            for &u in &u_values {
                us.push(u);
                vs.push(v);
            }
        }
        (us, vs)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            samples_u: DEFAULT_SAMPLES,
            samples_v: DEFAULT_SAMPLES,
        }
    }
}

impl Validate for GridSpec {
    fn validate(&self) -> Result<()> {
        if self.samples_u < MIN_SAMPLES || self.samples_v < MIN_SAMPLES {
            return Err(SurfError::DegenerateGrid {
                samples_u: self.samples_u,
                samples_v: self.samples_v,
            });
        }
        match self.samples_u.checked_mul(self.samples_v) {
            Some(n) if n <= MAX_GRID_POINTS => Ok(()),
            _ => Err(SurfError::Topology(format!(
                "{}x{} grid exceeds the 32-bit index range",
                self.samples_u, self.samples_v
            ))),
        }
    }
}
