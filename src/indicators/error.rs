//! Failures raised while deriving indicators from a series

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IndicatorError {
    /// Series shorter than the slowest window needs.
    #[error("insufficient data")]
    InsufficientData { required: usize, available: usize },

    /// Degenerate numeric state, e.g. a non-finite value.
    #[error("computation fault: {0}")]
    ComputationFault(String),
}
