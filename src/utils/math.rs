/// Arithmetic mean. `NaN` for an empty slice.
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Median of an already sorted slice; the two central values are averaged
/// for even lengths.
pub fn median_of_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}

/// Largest distance of the minimum or maximum of `values` to `center`.
///
/// This is the "min-max interval" shared by most of the measures: the
/// values are usually a trimmed view of the sample while `center` stays the
/// mean of the untrimmed sample.
pub fn extreme_distance(values: &[f64], center: f64) -> f64 {
    let (lo, hi) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        });
    (center - lo).max(hi - center)
}

pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(f64::total_cmp);
    out
}
