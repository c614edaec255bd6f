//! Curve construction settings.

/// How samples with equal scores are ordered inside the threshold sweep.
///
/// Every mode falls back to the original input index, so the sweep order is
/// always fully determined. Only points inside a run of tied scores depend on
/// the mode; the point after the last tied sample is the same for all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// Keep the original input order among tied samples.
    #[default]
    InputOrder,
    /// Negatives before positives (pessimistic curve).
    NegativesFirst,
    /// Positives before negatives (optimistic curve).
    PositivesFirst,
}

/// Configuration for [`CurveBuilder`](crate::CurveBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveConfig {
    /// Ordering rule for tied scores.
    pub tie_break: TieBreak,
    /// Minimum number of samples before the sort runs on the rayon pool.
    /// Ignored without the `parallel` feature.
    pub parallel_threshold: usize,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::InputOrder,
            parallel_threshold: 100_000,
        }
    }
}
