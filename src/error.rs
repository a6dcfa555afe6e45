use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Faults raised outside the pure chart pipeline.
///
/// Degenerate chart input (too few samples, zero-area surface) is not an error;
/// it is reported as [`crate::core::NoChart`].
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
