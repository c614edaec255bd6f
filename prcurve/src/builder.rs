//! Threshold sweep over descending scores.
//!
//! [`CurveBuilder::build`] validates the inputs, orders the samples by
//! descending score and walks them once, accumulating true and false
//! positives. Each accepted sample contributes one `(recall, precision)` point
//! after the `(0, 1)` origin, so `n` samples give `n + 1` points.

use std::cmp::Ordering;

use prcurve_core::{BinaryLabel, PrCurveError, Result};

use crate::config::{CurveConfig, TieBreak};
use crate::curve::{PrCurve, PrPoint};

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Builds precision-recall curves with a fixed [`CurveConfig`].
#[derive(Debug, Clone, Default)]
pub struct CurveBuilder {
    config: CurveConfig,
}

impl CurveBuilder {
    /// Builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CurveConfig) -> Self {
        Self { config }
    }

    /// Set the ordering rule for tied scores.
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.config.tie_break = tie_break;
        self
    }

    /// Set the sample count from which the sort uses rayon.
    pub fn parallel_threshold(mut self, n: usize) -> Self {
        self.config.parallel_threshold = n;
        self
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }

    /// Compute the precision-recall curve for `labels` and `scores`.
    ///
    /// Scores are ordered with [`f64::total_cmp`], so `-0.0` sorts below
    /// `0.0` and NaN never panics; non-finite scores are otherwise
    /// meaningless to the curve.
    ///
    /// # Errors
    ///
    /// Returns [`PrCurveError::InvalidInput`] if the slices differ in length
    /// or a label is neither 0 nor 1, and [`PrCurveError::NoPositiveSamples`]
    /// if no label is positive (including empty input). Both checks run
    /// before any sorting.
    pub fn build<L: BinaryLabel>(&self, labels: &[L], scores: &[f64]) -> Result<PrCurve> {
        let (positive, total_positives) = classify(labels, scores)?;
        let n = positive.len();

        let mut order: Vec<usize> = (0..n).collect();
        let parallel = cfg!(feature = "parallel") && n >= self.config.parallel_threshold;
        tracing::trace!(samples = n, parallel, "sorting samples by descending score");
        sort_descending(&mut order, scores, &positive, self.config.tie_break, parallel);

        let p = total_positives as f64;
        let mut points = Vec::with_capacity(n + 1);
        let mut thresholds = Vec::with_capacity(n + 1);
        points.push(PrPoint::ORIGIN);
        thresholds.push(f64::INFINITY);

        let mut tp = 0usize;
        let mut fp = 0usize;
        for &i in &order {
            if positive[i] {
                tp += 1;
            } else {
                fp += 1;
            }

            let recall = tp as f64 / p;
            // tp + fp >= 1 from the first sample on
            let precision = if tp + fp > 0 {
                tp as f64 / (tp + fp) as f64
            } else {
                1.0
            };
            points.push(PrPoint { recall, precision });
            thresholds.push(scores[i]);
        }

        tracing::debug!(
            event = "pr_curve_built",
            samples = n,
            positives = total_positives,
            tie_break = ?self.config.tie_break,
            "precision-recall curve built"
        );

        Ok(PrCurve::new(points, thresholds, total_positives))
    }
}

/// Compute the precision-recall curve with the default configuration.
///
/// Shorthand for `CurveBuilder::default().build(labels, scores)`.
///
/// # Errors
///
/// See [`CurveBuilder::build`].
pub fn pr_curve<L: BinaryLabel>(labels: &[L], scores: &[f64]) -> Result<PrCurve> {
    CurveBuilder::default().build(labels, scores)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Validate the inputs and resolve labels to positive flags.
fn classify<L: BinaryLabel>(labels: &[L], scores: &[f64]) -> Result<(Vec<bool>, usize)> {
    if labels.len() != scores.len() {
        return Err(PrCurveError::InvalidInput(format!(
            "labels length {} != scores length {}",
            labels.len(),
            scores.len()
        )));
    }

    let positive = labels
        .iter()
        .enumerate()
        .map(|(i, l)| {
            l.as_binary().ok_or_else(|| {
                PrCurveError::InvalidInput(format!("label at index {i} is not binary"))
            })
        })
        .collect::<Result<Vec<bool>>>()?;

    let total_positives = positive.iter().filter(|&&b| b).count();
    if total_positives == 0 {
        return Err(PrCurveError::NoPositiveSamples);
    }
    Ok((positive, total_positives))
}

/// Sort sample indices by descending score, ties resolved by `tie_break`
/// and then by original index.
fn sort_descending(
    order: &mut [usize],
    scores: &[f64],
    positive: &[bool],
    tie_break: TieBreak,
    parallel: bool,
) {
    let cmp = |&a: &usize, &b: &usize| -> Ordering {
        scores[b]
            .total_cmp(&scores[a])
            .then_with(|| match tie_break {
                TieBreak::InputOrder => Ordering::Equal,
                // false < true
                TieBreak::NegativesFirst => positive[a].cmp(&positive[b]),
                TieBreak::PositivesFirst => positive[b].cmp(&positive[a]),
            })
            .then_with(|| a.cmp(&b))
    };

    #[cfg(feature = "parallel")]
    {
        if parallel {
            use rayon::prelude::*;
            order.par_sort_unstable_by(cmp);
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    order.sort_unstable_by(cmp);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
