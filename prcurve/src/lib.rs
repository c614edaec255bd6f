//! Precision-recall curves for binary classifiers.
//!
//! - **Curve construction** — [`pr_curve`] and [`CurveBuilder`] sweep a decision
//!   threshold over descending scores and emit `(recall, precision)` points
//! - **Configuration** — [`CurveConfig`] and [`TieBreak`] control how equal
//!   scores are ordered and when the sort goes parallel (`parallel` feature)
//! - **Curve values** — [`PrCurve`] and [`PrPoint`], serializable with the
//!   `serde` feature
//!
//! ```
//! use prcurve::pr_curve;
//!
//! let curve = pr_curve(&[1u8, 1, 0, 0], &[0.9, 0.8, 0.2, 0.1]).unwrap();
//! assert_eq!(curve.len(), 5);
//! assert_eq!(curve.to_pairs()[0], (0.0, 1.0));
//! ```

pub mod builder;
pub mod config;
pub mod curve;

pub use builder::{pr_curve, CurveBuilder};
pub use config::{CurveConfig, TieBreak};
pub use curve::{PrCurve, PrPoint};
pub use prcurve_core::{BinaryLabel, PrCurveError, Result};
