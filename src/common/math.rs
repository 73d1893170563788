//! Windowed statistics over closing prices

/// The trailing `n` values of `values` (all of them if shorter).
pub fn tail(values: &[f64], n: usize) -> &[f64] {
    &values[values.len().saturating_sub(n)..]
}

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Consecutive differences `values[i] - values[i - 1]`.
pub fn diffs(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] - w[0]).collect()
}

/// Smoothing factor for an EMA of the given period.
pub fn ema_alpha(period: usize) -> f64 {
    2.0 / (period as f64 + 1.0)
}

/// Cold-started EMA: seeded with the first value of `values`, then folded
/// forward over the rest. Only the final value is returned.
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    let (&seed, rest) = values.split_first()?;
    let alpha = ema_alpha(period);
    Some(
        rest.iter()
            .fold(seed, |prev, &price| (price - prev) * alpha + prev),
    )
}
