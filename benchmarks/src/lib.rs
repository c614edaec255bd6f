//! Synthetic classifier output for the curve benchmarks.

/// Deterministic LCG stream of `u64` values.
fn lcg(seed: u64) -> impl FnMut() -> u64 {
    let mut state = seed;
    move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        state >> 11
    }
}

/// `n` labels with roughly `prevalence` positives and scores that are
/// shifted upward for positives. `levels` quantizes the scores to force
/// ties; `None` keeps them continuous.
pub fn synthetic_samples(
    n: usize,
    prevalence: f64,
    levels: Option<u32>,
    seed: u64,
) -> (Vec<bool>, Vec<f64>) {
    let mut next = lcg(seed);
    let mut unit = move || next() as f64 / (1u64 << 53) as f64;

    let mut labels = Vec::with_capacity(n);
    let mut scores = Vec::with_capacity(n);
    for _ in 0..n {
        let positive = unit() < prevalence;
        let raw = 0.7 * unit() + if positive { 0.3 } else { 0.0 };
        let score = match levels {
            Some(k) => (raw * k as f64).floor() / k as f64,
            None => raw,
        };
        labels.push(positive);
        scores.push(score);
    }
    if let Some(first) = labels.first_mut() {
        *first = true;
    }
    (labels, scores)
}
