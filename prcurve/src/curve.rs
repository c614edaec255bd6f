//! Precision-recall curve values.

/// A single point on the precision-recall curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrPoint {
    /// Recall: TP / (TP + FN).
    pub recall: f64,
    /// Precision: TP / (TP + FP).
    pub precision: f64,
}

impl PrPoint {
    /// The anchor every curve starts from: nothing accepted yet.
    pub const ORIGIN: PrPoint = PrPoint {
        recall: 0.0,
        precision: 1.0,
    };
}

impl From<PrPoint> for (f64, f64) {
    fn from(p: PrPoint) -> Self {
        (p.recall, p.precision)
    }
}

/// Precision-recall curve produced by a threshold sweep.
///
/// Holds `n + 1` points for `n` samples. Point 0 is [`PrPoint::ORIGIN`] at
/// threshold `+inf`; point `k` is the state after accepting the `k`
/// highest-scored samples, with the `k`-th sample's score as threshold.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PrCurve {
    points: Vec<PrPoint>,
    thresholds: Vec<f64>,
    total_positives: usize,
}

impl PrCurve {
    pub(crate) fn new(points: Vec<PrPoint>, thresholds: Vec<f64>, total_positives: usize) -> Self {
        debug_assert_eq!(points.len(), thresholds.len());
        Self {
            points,
            thresholds,
            total_positives,
        }
    }

    /// Curve points in sweep order.
    pub fn points(&self) -> &[PrPoint] {
        &self.points
    }

    /// Score threshold for each point; entry 0 is `f64::INFINITY`.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Number of positive samples the recall is normalized by.
    pub fn total_positives(&self) -> usize {
        self.total_positives
    }

    /// Number of points (samples + 1).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a built curve, which carries at least the origin.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Recall column.
    pub fn recalls(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.recall).collect()
    }

    /// Precision column.
    pub fn precisions(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.precision).collect()
    }

    /// The curve as `(recall, precision)` rows.
    pub fn to_pairs(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|&p| p.into()).collect()
    }

    /// Consume the curve, keeping only its points.
    pub fn into_points(self) -> Vec<PrPoint> {
        self.points
    }
}

impl<'a> IntoIterator for &'a PrCurve {
    type Item = &'a PrPoint;
    type IntoIter = std::slice::Iter<'a, PrPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
