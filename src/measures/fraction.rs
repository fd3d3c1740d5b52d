use crate::core::Estimate;
use crate::utils::math::{extreme_distance, mean};

/// Target share of values kept by [`percmeas`].
pub const PERCMEAS_FRACTION: f64 = 0.76;

/// Target share of values kept by [`close68`].
pub const CLOSE68_FRACTION: f64 = 0.68;

/// Number of values `k` in `1..=n` whose share `k / n` is closest to
/// `fraction`.
///
/// Candidates are scanned in increasing `k` and only a strictly smaller
/// distance replaces the current best, so on a tie the smaller count wins.
pub fn closest_fraction_count(n: usize, fraction: f64) -> usize {
    let mut best = 1;
    let mut best_distance = f64::INFINITY;
    for k in 1..=n {
        let distance = (k as f64 / n as f64 - fraction).abs();
        if distance < best_distance {
            best = k;
            best_distance = distance;
        }
    }
    best
}

/// Keeps the `keep` values closest to `center`, in their original order.
///
/// Values are ranked by absolute deviation with a stable sort, so among equal
/// deviations the one seen first is discarded first. This yields the same set
/// as repeatedly removing the first worst-deviating value.
pub fn retain_closest_to_mean(sample: &[f64], center: f64, keep: usize) -> Vec<f64> {
    let mut order: Vec<usize> = (0..sample.len()).collect();
    order.sort_by(|&a, &b| {
        let da = (sample[a] - center).abs();
        let db = (sample[b] - center).abs();
        db.total_cmp(&da)
    });

    let discard = sample.len().saturating_sub(keep);
    let mut kept_idx: Vec<usize> = order.split_off(discard);
    kept_idx.sort_unstable();
    kept_idx.into_iter().map(|i| sample[i]).collect()
}

fn closest_fraction_interval(sample: &[f64], fraction: f64) -> Estimate {
    let m = mean(sample);
    let keep = closest_fraction_count(sample.len(), fraction);
    let kept = retain_closest_to_mean(sample, m, keep);
    Estimate::new(m, extreme_distance(&kept, m))
}

/// Min-max distance after keeping the ~76% of values closest to the mean.
pub fn percmeas(sample: &[f64]) -> Estimate {
    closest_fraction_interval(sample, PERCMEAS_FRACTION)
}

/// Min-max distance after keeping the ~68% of values closest to the mean.
pub fn close68(sample: &[f64]) -> Estimate {
    closest_fraction_interval(sample, CLOSE68_FRACTION)
}
