use thiserror::Error;

/// Errors raised when a signal violates the engines' preconditions.
///
/// Every variant is recoverable: the caller can correct the input and retry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpectralError {
    #[error("sample axis needs at least 2 points, got {got}")]
    AxisTooShort { got: usize },

    #[error("signal holds {signal} samples but the sample axis implies {expected}")]
    LengthMismatch { signal: usize, expected: usize },

    #[error("signal holds {signal} samples but the analysis window carries {expected}")]
    WindowMismatch { signal: usize, expected: usize },

    #[error("sample axis must be strictly increasing, first step is {step}")]
    AxisNotIncreasing { step: f64 },

    #[error("sample spacing breaks at index {index}: step {found}, expected {expected}")]
    NonUniformSpacing {
        index: usize,
        found: f64,
        expected: f64,
    },

    #[error("transform backend failure: {0}")]
    Backend(String),
}
