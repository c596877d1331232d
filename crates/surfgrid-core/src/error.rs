use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurfError {
    #[error("Degenerate grid: {samples_u}x{samples_v} samples, at least 3 per axis are required")]
    DegenerateGrid { samples_u: usize, samples_v: usize },

    #[error("Parameter length mismatch: {u_len} U values, {v_len} V values")]
    LengthMismatch { u_len: usize, v_len: usize },

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("Surface evaluation failed: {0}")]
    Evaluation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Topology error: {0}")]
    Topology(String),

    #[error("Input tuple {index}: {source}")]
    Tuple {
        index: usize,
        #[source]
        source: Box<SurfError>,
    },
}

impl SurfError {
    /// Attach the index of the aligned input tuple that produced this error.
    pub fn at_tuple(self, index: usize) -> Self {
        match self {
            already @ SurfError::Tuple { .. } => already,
            other => SurfError::Tuple {
                index,
                source: Box::new(other),
            },
        }
    }

    /// Index of the failing input tuple, when known.
    pub fn tuple_index(&self) -> Option<usize> {
        match self {
            SurfError::Tuple { index, .. } => Some(*index),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SurfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_tuple_wraps_once() {
        let err = SurfError::DegenerateGrid {
            samples_u: 2,
            samples_v: 5,
        }
        .at_tuple(3)
        .at_tuple(7);
        assert_eq!(err.tuple_index(), Some(3));
        assert!(err.to_string().starts_with("Input tuple 3:"));
    }

    #[test]
    fn test_plain_error_has_no_index() {
        let err = SurfError::Evaluation("boom".into());
        assert_eq!(err.tuple_index(), None);
    }
}
