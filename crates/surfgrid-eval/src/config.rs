//! Evaluation settings owned by the caller between invocations.

use serde::{Deserialize, Serialize};
use surfgrid_core::traits::Validate;
use surfgrid_core::{Result, SurfError};
use surfgrid_geometry::{CoordMode, GridSpec, DEFAULT_SAMPLES};
use surfgrid_math::ParamPlane;

/// Where the sample parameters come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EvalMode {
    /// Regular grid over the surface domain.
    #[default]
    Grid,
    /// Caller-supplied parameter locations.
    Explicit,
}

/// How explicit parameters are supplied. Ignored in grid mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Separate U and V sequences.
    #[default]
    PairedScalars,
    /// 3D vertices projected onto [`EvaluateConfig::orientation`].
    Vertices,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluateConfig {
    pub coord_mode: CoordMode,
    pub eval_mode: EvalMode,
    pub input_mode: InputMode,
    /// Plane vertices are projected onto in [`InputMode::Vertices`].
    pub orientation: ParamPlane,
    /// Grid samples used when no per-tuple count is supplied.
    pub samples_u: usize,
    pub samples_v: usize,
    /// Evaluate input tuples on the rayon pool.
    pub parallel: bool,
}

impl EvaluateConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SurfError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SurfError::Config(e.to_string()))
    }

    pub fn default_grid(&self) -> GridSpec {
        GridSpec {
            samples_u: self.samples_u,
            samples_v: self.samples_v,
        }
    }

    pub fn with_coord_mode(mut self, coord_mode: CoordMode) -> Self {
        self.coord_mode = coord_mode;
        self
    }

    pub fn with_eval_mode(mut self, eval_mode: EvalMode) -> Self {
        self.eval_mode = eval_mode;
        self
    }

    pub fn with_input_mode(mut self, input_mode: InputMode) -> Self {
        self.input_mode = input_mode;
        self
    }

    pub fn with_orientation(mut self, orientation: ParamPlane) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_samples(mut self, samples_u: usize, samples_v: usize) -> Self {
        self.samples_u = samples_u;
        self.samples_v = samples_v;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for EvaluateConfig {
    fn default() -> Self {
        Self {
            coord_mode: CoordMode::PlanarFunction,
            eval_mode: EvalMode::Grid,
            input_mode: InputMode::PairedScalars,
            orientation: ParamPlane::XY,
            samples_u: DEFAULT_SAMPLES,
            samples_v: DEFAULT_SAMPLES,
            parallel: false,
        }
    }
}

impl Validate for EvaluateConfig {
    fn validate(&self) -> Result<()> {
        self.default_grid()
            .validate()
            .map_err(|e| SurfError::Config(format!("default sample counts: {}", e)))
    }
}

/// Which outputs have a downstream consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutputRequest {
    pub vertices: bool,
    pub edges: bool,
    pub faces: bool,
}

impl OutputRequest {
    pub fn all() -> Self {
        Self {
            vertices: true,
            edges: true,
            faces: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn vertices_only() -> Self {
        Self {
            vertices: true,
            ..Self::default()
        }
    }

    pub fn any(&self) -> bool {
        self.vertices || self.edges || self.faces
    }
}
