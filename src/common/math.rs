//! Causal series primitives shared by the indicators.
//!
//! Every function returns one output per input. Rolling outputs before the
//! first full window are `None`.

/// Smoothing factor for an exponential average of the given span.
pub fn ema_alpha(span: usize) -> f64 {
    2.0 / (span as f64 + 1.0)
}

/// One recursive EMA step.
pub fn ema_from_previous(value: f64, previous: f64, span: usize) -> f64 {
    previous + ema_alpha(span) * (value - previous)
}

/// Exponential moving average seeded with the first value, no bias adjustment.
pub fn ema_series(values: &[f64], span: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut iter = values.iter();
    let Some(&first) = iter.next() else {
        return out;
    };
    let mut previous = first;
    out.push(previous);
    for &value in iter {
        previous = ema_from_previous(value, previous, span);
        out.push(previous);
    }
    out
}

/// Trailing simple moving average.
pub fn sma_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; values.len()];
    }
    let mut out = vec![None; values.len()];
    let mut sum = 0.0;
    for (i, &value) in values.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= values[i - window];
        }
        if i + 1 >= window {
            out[i] = Some(sum / window as f64);
        }
    }
    out
}

/// Trailing sample standard deviation (n - 1 denominator).
///
/// Each window is recomputed from its own mean, so a constant window yields
/// exactly zero.
pub fn rolling_std_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window < 2 {
        return vec![None; values.len()];
    }
    let mut out = vec![None; values.len()];
    for end in window..=values.len() {
        let slice = &values[end - window..end];
        let mean = slice.iter().sum::<f64>() / window as f64;
        let variance = slice.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (window - 1) as f64;
        out[end - 1] = Some(variance.sqrt());
    }
    out
}

/// Last element of a rolling series, if defined.
pub fn last_defined(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}
