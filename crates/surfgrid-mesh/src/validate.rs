use std::collections::HashMap;

use surfgrid_core::traits::Validate;
use surfgrid_core::{Result, SurfError};

use crate::topology::{GridTopology, Quad};

impl Validate for GridTopology {
    fn validate(&self) -> Result<()> {
        let n = self.point_count;

        // 1. Edge endpoints in range and distinct
        for (edge_idx, &[a, b]) in self.edges.iter().enumerate() {
            if a as usize >= n || b as usize >= n {
                return Err(SurfError::Topology(format!(
                    "Edge {} ({}, {}) references a point outside [0, {})",
                    edge_idx, a, b, n
                )));
            }
            if a == b {
                return Err(SurfError::Topology(format!(
                    "Edge {} is degenerate: both ends are point {}",
                    edge_idx, a
                )));
            }
        }

        // 2. Face corners in range and mutually distinct
        for (face_idx, face) in self.faces.iter().enumerate() {
            if let Some(&bad) = face.iter().find(|&&i| i as usize >= n) {
                return Err(SurfError::Topology(format!(
                    "Face {} references point {} outside [0, {})",
                    face_idx, bad, n
                )));
            }
            for i in 0..4 {
                if face[i + 1..].contains(&face[i]) {
                    return Err(SurfError::Topology(format!(
                        "Face {} repeats point {}: {:?}",
                        face_idx, face[i], face
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Check that faces sharing an edge traverse it in opposite directions.
///
/// Fails when a directed edge occurs in two faces, which means the two faces
/// disagree on winding.
pub fn check_winding(faces: &[Quad]) -> Result<()> {
    let mut directed: HashMap<(u32, u32), usize> = HashMap::new();

    for (face_idx, face) in faces.iter().enumerate() {
        for k in 0..4 {
            let key = (face[k], face[(k + 1) % 4]);
            if let Some(other) = directed.insert(key, face_idx) {
                return Err(SurfError::Topology(format!(
                    "Faces {} and {} both traverse edge {} -> {}",
                    other, face_idx, key.0, key.1
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::GridTopology;
    use surfgrid_geometry::GridSpec;

    #[test]
    fn test_grid_topology_validates() {
        let topo = GridTopology::from_spec(GridSpec::new(6, 4).unwrap()).unwrap();
        topo.validate().unwrap();
        check_winding(&topo.faces).unwrap();
    }

    #[test]
    fn test_out_of_range_face_rejected() {
        let topo = GridTopology {
            point_count: 4,
            edges: vec![],
            faces: vec![[0, 2, 3, 4]],
        };
        let err = topo.validate().unwrap_err();
        assert!(err.to_string().contains("point 4"));
    }

    #[test]
    fn test_repeated_corner_rejected() {
        let topo = GridTopology {
            point_count: 4,
            edges: vec![],
            faces: vec![[0, 1, 2, 1]],
        };
        assert!(topo.validate().is_err());
    }

    #[test]
    fn test_degenerate_edge_rejected() {
        let topo = GridTopology {
            point_count: 4,
            edges: vec![[2, 2]],
            faces: vec![],
        };
        assert!(topo.validate().is_err());
    }

    #[test]
    fn test_flipped_face_breaks_winding() {
        // second cell wound the other way
        let faces = vec![[0, 3, 4, 1], [2, 5, 4, 1]];
        assert!(check_winding(&faces).is_err());
    }
}
