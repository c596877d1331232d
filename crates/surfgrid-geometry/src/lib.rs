//! surfgrid geometry: the surface capability, parameter domains, and sampling grids.

pub mod grid;
pub mod surface;

pub use grid::{linspace, GridSpec, DEFAULT_SAMPLES, MIN_SAMPLES};
pub use surface::{CoordMode, Domain, Surface};
