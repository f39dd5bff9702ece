use argminmax::ArgMinMax;
use statrs::statistics::Statistics;

use crate::config::ANALYSIS;

// Callers guarantee a non-empty, NaN-free slice (bars are validated on entry).
pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

pub fn get_min(vec: &[f64]) -> f64 {
    let min_index: usize = vec.argmin();
    vec[min_index]
}

/// Price difference expressed in pips. No rounding: callers compare the raw value.
#[inline]
pub fn price_to_pips(price_diff: f64) -> f64 {
    price_diff * ANALYSIS.pips_per_unit
}

/// Arithmetic mean, `None` for an empty slice rather than NaN.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().mean())
}
