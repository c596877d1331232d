//! Edge and quad topology for a row-major sample grid.
//!
//! Point `r * samples_u + c` sits in row `r`, column `c`. Topology depends only
//! on the two sample counts, never on point coordinates.

use serde::{Deserialize, Serialize};
use surfgrid_core::traits::Validate;
use surfgrid_core::Result;
use surfgrid_geometry::GridSpec;

/// Pair of point indices.
pub type Edge = [u32; 2];

/// Four point indices of a grid cell.
pub type Quad = [u32; 4];

/// Edges of a `samples_u x samples_v` grid.
///
/// Per row: the `samples_u - 1` horizontal edges, then (except on the last row)
/// the `samples_u` vertical edges to the next row.
pub fn build_edges(samples_u: usize, samples_v: usize) -> Vec<Edge> {
    let horizontal = samples_v * samples_u.saturating_sub(1);
    let vertical = samples_v.saturating_sub(1) * samples_u;
    let mut edges = Vec::with_capacity(horizontal + vertical);

    for row in 0..samples_v {
        let base = row * samples_u;
        for col in 0..samples_u.saturating_sub(1) {
            edges.push([(base + col) as u32, (base + col + 1) as u32]);
        }
        if row + 1 < samples_v {
            for col in 0..samples_u {
                edges.push([(base + col) as u32, (base + col + samples_u) as u32]);
            }
        }
    }
    edges
}

/// Quads of a `samples_u x samples_v` grid, one per cell.
///
/// Cell `i = r * samples_u + c` yields `(i, i + samples_u, i + samples_u + 1, i + 1)`,
/// giving every face the same winding.
pub fn build_faces(samples_u: usize, samples_v: usize) -> Vec<Quad> {
    let cells_u = samples_u.saturating_sub(1);
    let cells_v = samples_v.saturating_sub(1);
    let mut faces = Vec::with_capacity(cells_u * cells_v);

    for row in 0..cells_v {
        for col in 0..cells_u {
            let i = row * samples_u + col;
            faces.push([
                i as u32,
                (i + samples_u) as u32,
                (i + samples_u + 1) as u32,
                (i + 1) as u32,
            ]);
        }
    }
    faces
}

/// Edges and faces of one sampled grid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridTopology {
    pub point_count: usize,
    pub edges: Vec<Edge>,
    pub faces: Vec<Quad>,
}

impl GridTopology {
    /// Build the topology of a grid, rejecting counts `GridSpec` would reject.
    pub fn from_spec(spec: GridSpec) -> Result<Self> {
        spec.validate()?;
        Ok(Self {
            point_count: spec.point_count(),
            edges: build_edges(spec.samples_u, spec.samples_v),
            faces: build_faces(spec.samples_u, spec.samples_v),
        })
    }

    /// Topology of scattered points: no edges, no faces.
    pub fn scattered(point_count: usize) -> Self {
        Self {
            point_count,
            ..Self::default()
        }
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.faces.is_empty()
    }
}
