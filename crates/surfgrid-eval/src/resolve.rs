//! Parameter resolution: which `(u, v)` arrays a surface is evaluated at.

use serde::{Deserialize, Serialize};
use surfgrid_core::{Result, SurfError};
use surfgrid_geometry::{CoordMode, GridSpec, Surface};
use surfgrid_math::{ParamPlane, Point3};

use crate::config::{EvalMode, EvaluateConfig, InputMode};

/// Source of the sample parameters for one input tuple.
#[derive(Debug, Clone, Copy)]
pub enum ParameterSource<'a> {
    Grid(GridSpec),
    Pairs { us: &'a [f64], vs: &'a [f64] },
    Vertices { vertices: &'a [Point3], plane: ParamPlane },
}

impl<'a> ParameterSource<'a> {
    /// Pick the source the configured modes call for.
    ///
    /// Grid mode validates the sample counts; explicit modes ignore them.
    pub fn from_config(
        config: &EvaluateConfig,
        us: &'a [f64],
        vs: &'a [f64],
        vertices: &'a [Point3],
        samples_u: usize,
        samples_v: usize,
    ) -> Result<Self> {
        Ok(match (config.eval_mode, config.input_mode) {
            (EvalMode::Grid, _) => ParameterSource::Grid(GridSpec::new(samples_u, samples_v)?),
            (EvalMode::Explicit, InputMode::PairedScalars) => ParameterSource::Pairs { us, vs },
            (EvalMode::Explicit, InputMode::Vertices) => ParameterSource::Vertices {
                vertices,
                plane: config.orientation,
            },
        })
    }
}

/// Non-fatal notice that a surface was authored under a different convention
/// than the evaluator is configured for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub tuple: usize,
    pub surface_mode: CoordMode,
    pub node_mode: CoordMode,
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "input surface mode is {}, but evaluation mode is {}; the result can be unexpected",
            self.surface_mode, self.node_mode
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedParameters {
    pub us: Vec<f64>,
    pub vs: Vec<f64>,
    /// Set when the parameters form a row-major grid.
    pub grid: Option<GridSpec>,
    pub advisory: Option<Advisory>,
}

impl ResolvedParameters {
    pub fn len(&self) -> usize {
        self.us.len()
    }

    pub fn is_empty(&self) -> bool {
        self.us.is_empty()
    }
}

/// Resolve the parameter arrays for input tuple `tuple`.
pub fn resolve(
    coord_mode: CoordMode,
    surface: &dyn Surface,
    source: ParameterSource<'_>,
    tuple: usize,
) -> Result<ResolvedParameters> {
    let advisory = check_coord_mode(coord_mode, surface, tuple);

    let (us, vs, grid) = match source {
        ParameterSource::Grid(spec) => {
            let (us, vs) = spec.parameters(&surface.domain());
            (us, vs, Some(spec))
        }
        ParameterSource::Pairs { us, vs } => {
            if us.len() != vs.len() {
                return Err(SurfError::LengthMismatch {
                    u_len: us.len(),
                    v_len: vs.len(),
                });
            }
            (us.to_vec(), vs.to_vec(), None)
        }
        ParameterSource::Vertices { vertices, plane } => {
            let (us, vs): (Vec<f64>, Vec<f64>) =
                vertices.iter().map(|&p| plane.project(p)).unzip();
            (us, vs, None)
        }
    };

    Ok(ResolvedParameters {
        us,
        vs,
        grid,
        advisory,
    })
}

fn check_coord_mode(node_mode: CoordMode, surface: &dyn Surface, tuple: usize) -> Option<Advisory> {
    let surface_mode = surface.coord_mode();
    if surface_mode == node_mode {
        return None;
    }
    let advisory = Advisory {
        tuple,
        surface_mode,
        node_mode,
    };
    log::warn!("input tuple {}: {}", tuple, advisory);
    Some(advisory)
}
