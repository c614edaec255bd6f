//! Structured error types for curve construction.

use thiserror::Error;

/// Unified error type for all prcurve operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrCurveError {
    /// The label sequence contains no positive sample, so recall is undefined.
    #[error("no positive samples in labels")]
    NoPositiveSamples,

    /// Invalid input (mismatched lengths, non-binary label values)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PrCurveError>;
