use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("non-finite coordinate at index {index}: x={x}, y={y}")]
    NonFiniteCoordinate { index: usize, x: f64, y: f64 },

    #[error("invalid precision: {precision} (must be >= 1)")]
    InvalidPrecision { precision: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("range is undefined for an empty path")]
    DegenerateRange,

    #[error("persistence failure: {0}")]
    Persistence(String),
}

impl ChartError {
    /// Returns `true` for caller contract violations (bad coordinates,
    /// precision or parameters).
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::NonFiniteCoordinate { .. } | Self::InvalidPrecision { .. } | Self::InvalidInput(_)
        )
    }
}
