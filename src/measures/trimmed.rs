use crate::core::Estimate;
use crate::utils::math::{extreme_distance, mean, sorted_copy};

/// Values removed from each end by [`exclextr`].
pub const EXTREMES_EXCLUDED: usize = 1;

/// Share of the sorted sample kept by [`middle`], in percent.
pub const MIDDLE_PERCENTAGE: f64 = 50.0;

/// Min-max distance after dropping the single smallest and largest value.
pub fn exclextr(sample: &[f64]) -> Estimate {
    let m = mean(sample);
    let sorted = sorted_copy(sample);
    let kept = &sorted[EXTREMES_EXCLUDED..sorted.len() - EXTREMES_EXCLUDED];
    Estimate::new(m, extreme_distance(kept, m))
}

/// Min-max distance over the central half of the sorted sample.
///
/// `floor(0.25 * N)` values are cut from each end.
pub fn middle(sample: &[f64]) -> Estimate {
    let m = mean(sample);
    let sorted = sorted_copy(sample);
    let cut = ((MIDDLE_PERCENTAGE / 2.0) / 100.0 * sorted.len() as f64) as usize;
    let kept = &sorted[cut..sorted.len() - cut];
    Estimate::new(m, extreme_distance(kept, m))
}
