//! Batched evaluation over aligned input tuples.

use std::sync::Arc;

use rayon::prelude::*;
use surfgrid_core::traits::BoundingBox;
use surfgrid_core::{aligned_count, repeat_last, Result};
use surfgrid_geometry::{CoordMode, Surface};
use surfgrid_math::{Aabb3, Point3};
use surfgrid_mesh::{Edge, GridTopology, Quad};

use crate::config::{EvaluateConfig, OutputRequest};
use crate::resolve::{resolve, Advisory, ParameterSource};
use crate::sampler::sample;
use crate::transform::transform;

/// The six batched inputs. Shorter collections are padded by repeating their
/// last element.
pub struct EvaluateInputs {
    pub surfaces: Vec<Arc<dyn Surface>>,
    pub us: Vec<Vec<f64>>,
    pub vs: Vec<Vec<f64>>,
    pub vertices: Vec<Vec<Point3>>,
    pub samples_u: Vec<usize>,
    pub samples_v: Vec<usize>,
}

impl EvaluateInputs {
    /// Inputs with nothing but surfaces connected: one empty U/V/vertex
    /// sequence each, and the configured default sample counts.
    pub fn new(surfaces: Vec<Arc<dyn Surface>>, config: &EvaluateConfig) -> Self {
        Self {
            surfaces,
            us: vec![Vec::new()],
            vs: vec![Vec::new()],
            vertices: vec![Vec::new()],
            samples_u: vec![config.samples_u],
            samples_v: vec![config.samples_v],
        }
    }

    pub fn with_parameters(mut self, us: Vec<Vec<f64>>, vs: Vec<Vec<f64>>) -> Self {
        self.us = us;
        self.vs = vs;
        self
    }

    pub fn with_vertices(mut self, vertices: Vec<Vec<Point3>>) -> Self {
        self.vertices = vertices;
        self
    }

    pub fn with_samples(mut self, samples_u: Vec<usize>, samples_v: Vec<usize>) -> Self {
        self.samples_u = samples_u;
        self.samples_v = samples_v;
        self
    }

    /// Number of aligned tuples. Fails if any collection is empty.
    pub fn tuple_count(&self) -> Result<usize> {
        aligned_count(&[
            ("surfaces", self.surfaces.len()),
            ("u", self.us.len()),
            ("v", self.vs.len()),
            ("vertices", self.vertices.len()),
            ("samples_u", self.samples_u.len()),
            ("samples_v", self.samples_v.len()),
        ])
    }
}

/// Points and topology produced for one input tuple.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationResult {
    pub points: Vec<Point3>,
    pub topology: GridTopology,
}

impl EvaluationResult {
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
}

impl BoundingBox for EvaluationResult {
    type Bounds = Aabb3;

    fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points(&self.points)
    }
}

/// Three parallel collections, one entry per aligned input tuple.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationOutput {
    pub vertices: Vec<Vec<Point3>>,
    pub edges: Vec<Vec<Edge>>,
    pub faces: Vec<Vec<Quad>>,
    pub advisories: Vec<Advisory>,
}

impl EvaluationOutput {
    fn push(&mut self, result: EvaluationResult) {
        self.vertices.push(result.points);
        self.edges.push(result.topology.edges);
        self.faces.push(result.topology.faces);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Evaluates batches of surfaces under one configuration.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluateConfig,
}

impl Evaluator {
    pub fn new(config: EvaluateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluateConfig {
        &self.config
    }

    /// Evaluate every aligned input tuple, in input order.
    ///
    /// Returns an empty output without touching any surface when `request`
    /// asks for nothing. Any failure aborts the run and names its tuple.
    pub fn run(&self, inputs: &EvaluateInputs, request: OutputRequest) -> Result<EvaluationOutput> {
        if !request.any() {
            log::debug!("no output requested, skipping evaluation");
            return Ok(EvaluationOutput::default());
        }

        let count = inputs.tuple_count()?;
        log::debug!(
            "evaluating {} input tuple(s), {:?} mode, parallel={}",
            count,
            self.config.eval_mode,
            self.config.parallel
        );

        let evaluated: Vec<Result<(EvaluationResult, Option<Advisory>)>> = if self.config.parallel {
            (0..count)
                .into_par_iter()
                .map(|index| self.evaluate_tuple(inputs, index))
                .collect()
        } else {
            (0..count)
                .map(|index| self.evaluate_tuple(inputs, index))
                .collect()
        };

        let mut output = EvaluationOutput::default();
        for item in evaluated {
            let (result, advisory) = item?;
            output.push(result);
            output.advisories.extend(advisory);
        }
        Ok(output)
    }

    fn evaluate_tuple(
        &self,
        inputs: &EvaluateInputs,
        index: usize,
    ) -> Result<(EvaluationResult, Option<Advisory>)> {
        let surface: &dyn Surface = repeat_last(&inputs.surfaces, index).as_ref();
        let source = ParameterSource::from_config(
            &self.config,
            repeat_last(&inputs.us, index).as_slice(),
            repeat_last(&inputs.vs, index).as_slice(),
            repeat_last(&inputs.vertices, index).as_slice(),
            *repeat_last(&inputs.samples_u, index),
            *repeat_last(&inputs.samples_v, index),
        )
        .map_err(|e| e.at_tuple(index))?;

        evaluate_one(self.config.coord_mode, surface, source, index).map_err(|e| e.at_tuple(index))
    }
}

/// Resolve, mesh, sample, and transform one tuple.
fn evaluate_one(
    coord_mode: CoordMode,
    surface: &dyn Surface,
    source: ParameterSource<'_>,
    index: usize,
) -> Result<(EvaluationResult, Option<Advisory>)> {
    let params = resolve(coord_mode, surface, source, index)?;

    let topology = match params.grid {
        Some(spec) => GridTopology::from_spec(spec)?,
        None => GridTopology::scattered(params.len()),
    };

    let mut points = sample(surface, &params.us, &params.vs)?;
    if coord_mode == CoordMode::PlanarFunction {
        transform(surface, &mut points);
    }

    log::debug!(
        "tuple {}: {} points, {} edges, {} faces",
        index,
        points.len(),
        topology.edge_count(),
        topology.face_count()
    );

    Ok((EvaluationResult { points, topology }, params.advisory))
}
