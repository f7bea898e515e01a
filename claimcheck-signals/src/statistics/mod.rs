// claimcheck-signals/src/statistics/mod.rs
use libm::{fabs, round};

/// Arithmetic mean of a slice; 0.0 when empty.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Rounds to the nearest integer, resolving exact halves to the even neighbour.
pub fn round_half_even(value: f64) -> f64 {
    let rounded = round(value);
    if fabs(rounded - value) == 0.5 {
        2.0 * round(value / 2.0)
    } else {
        rounded
    }
}

/// Converts a unit-interval score into an integer percentage in `0..=100`.
pub fn to_percent(score: f64) -> u8 {
    round_half_even(score * 100.0).clamp(0.0, 100.0) as u8
}

/// Rounds a value to two decimal places, used for per-source display scores.
pub fn round_to_hundredths(value: f64) -> f64 {
    round_half_even(value * 100.0) / 100.0
}
