use crate::evaluation::estimators::OnlineEstimator;

/// Mean of every value seen so far.
///
/// Sums in arrival order, so after `n` values it equals
/// `stddev(&values[..n], Population).mean`. A NaN poisons every later
/// estimate, as it does the recomputed prefix mean.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RunningMean {
    seen: usize,
    total: f64,
}

impl OnlineEstimator for RunningMean {
    #[inline]
    fn add(&mut self, v: f64) {
        self.seen += 1;
        self.total += v;
    }

    /// NaN before the first value.
    #[inline]
    fn estimation(&self) -> f64 {
        match self.seen {
            0 => f64::NAN,
            n => self.total / n as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_nan() {
        assert!(RunningMean::default().estimation().is_nan());
    }

    #[test]
    fn tracks_mean() {
        let mut m = RunningMean::default();
        m.add(1.0);
        assert_eq!(m.estimation(), 1.0);
        m.add(4.0);
        assert_eq!(m.estimation(), 2.5);
        m.add(-2.5);
        assert_eq!(m.estimation(), 2.5 / 3.0);
    }

    #[test]
    fn nan_propagates() {
        let mut m = RunningMean::default();
        m.add(1.0);
        m.add(f64::NAN);
        m.add(4.0);
        assert!(m.estimation().is_nan());
    }
}
