pub mod topology;
pub mod validate;

pub use topology::{build_edges, build_faces, Edge, GridTopology, Quad};
pub use validate::check_winding;
