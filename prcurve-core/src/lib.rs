//! Shared primitives for the prcurve workspace.
//!
//! - **Error types** — [`PrCurveError`] and [`Result`] for structured error handling
//! - **Labels** — [`BinaryLabel`], so callers can pass `bool` or integer 0/1 labels

pub mod error;
pub mod label;

pub use error::{PrCurveError, Result};
pub use label::BinaryLabel;
