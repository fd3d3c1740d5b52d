use crate::evaluation::estimators::{OnlineEstimator, RunningMean};

/// Running mean of `deviations`: entry `i` is the mean of the first `i + 1`
/// values.
///
/// This is the population-form (`N`) mean of each prefix, updated
/// incrementally instead of recomputed per prefix.
pub fn convergence_trace(deviations: &[f64]) -> Vec<f64> {
    let mut running = RunningMean::default();
    let mut trace = Vec::with_capacity(deviations.len());
    for &d in deviations {
        running.add(d);
        trace.push(running.estimation());
    }
    trace
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::{StdDevMode, stddev};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn trace_matches_prefix_means() {
        let d = [1.0, 3.0, -1.0, 5.0];
        assert_eq!(convergence_trace(&d), vec![1.0, 2.0, 1.0, 2.0]);
        assert!(convergence_trace(&[]).is_empty());
    }

    #[test]
    fn incremental_equals_recomputed() {
        let mut rng = StdRng::seed_from_u64(5);
        let d: Vec<f64> = (0..300).map(|_| rng.random_range(-1.0..1.0)).collect();
        let trace = convergence_trace(&d);
        for i in [0usize, 1, 10, 150, 299] {
            let direct = stddev(&d[..=i], StdDevMode::Population).mean;
            assert!((trace[i] - direct).abs() < 1e-12, "i={i}");
        }
    }

    #[test]
    fn nan_deviation_poisons_later_prefixes() {
        let d = [1.0, f64::NAN, 3.0, -2.0];
        let trace = convergence_trace(&d);
        assert_eq!(trace[0], 1.0);
        for i in 0..d.len() {
            let direct = stddev(&d[..=i], StdDevMode::Population).mean;
            assert_eq!(trace[i].is_nan(), direct.is_nan(), "i={i}");
            if !direct.is_nan() {
                assert_eq!(trace[i], direct, "i={i}");
            }
        }
        assert!(trace[1..].iter().all(|v| v.is_nan()));
    }

    #[test]
    fn tail_is_calmer_than_head() {
        let mut rng = StdRng::seed_from_u64(11);
        let d: Vec<f64> = (0..5000).map(|_| rng.random_range(-1.0..1.0)).collect();
        let trace = convergence_trace(&d);
        let head = stddev(&trace[..500], StdDevMode::Population).uncertainty;
        let tail = stddev(&trace[4500..], StdDevMode::Population).uncertainty;
        assert!(tail < head, "head={head} tail={tail}");
    }
}
