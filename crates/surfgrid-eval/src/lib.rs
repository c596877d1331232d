//! Surface evaluation: resolve parameters, sample, remap axes, and mesh regular grids.

pub mod config;
pub mod orchestrator;
pub mod resolve;
pub mod sampler;
pub mod transform;

pub use config::{EvalMode, EvaluateConfig, InputMode, OutputRequest};
pub use orchestrator::{EvaluateInputs, EvaluationOutput, EvaluationResult, Evaluator};
pub use resolve::{resolve, Advisory, ParameterSource, ResolvedParameters};
pub use sampler::sample;
pub use transform::transform;
