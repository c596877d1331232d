pub mod align;
pub mod error;
pub mod traits;

pub use align::{aligned_count, repeat_last, zip_long_repeat};
pub use error::{Result, SurfError};
