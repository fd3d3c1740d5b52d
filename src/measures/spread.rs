use crate::core::Estimate;
use crate::utils::math::{extreme_distance, mean};

/// Denominator used by [`stddev`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StdDevMode {
    /// `N - 1`
    #[default]
    Sample,
    /// `N`
    Population,
}

/// Standard deviation around the sample mean.
pub fn stddev(sample: &[f64], mode: StdDevMode) -> Estimate {
    let m = mean(sample);
    let squares: f64 = sample.iter().map(|x| (x - m) * (x - m)).sum();
    let n = sample.len() as f64;
    let denominator = match mode {
        StdDevMode::Sample => n - 1.0,
        StdDevMode::Population => n,
    };
    Estimate::new(m, (squares / denominator).sqrt())
}

/// Largest distance of the sample minimum or maximum to the mean.
pub fn minmax(sample: &[f64]) -> Estimate {
    let m = mean(sample);
    Estimate::new(m, extreme_distance(sample, m))
}

/// Mean absolute deviation.
pub fn mad(sample: &[f64]) -> Estimate {
    let m = mean(sample);
    let total: f64 = sample.iter().map(|x| (x - m).abs()).sum();
    Estimate::new(m, total / sample.len() as f64)
}
