use crate::core::Estimate;
use crate::measures::{StdDevMode, UncertaintyMeasure, stddev};

/// `(uncertainty - truth) / truth`.
#[inline]
pub fn fractional_deviation(uncertainty: f64, truth: f64) -> f64 {
    (uncertainty - truth) / truth
}

/// Collects, per measure, the fractional deviation of each evaluated
/// subsample from a fixed ground-truth standard deviation.
///
/// Buffers are sized for the expected number of repetitions up front.
#[derive(Debug, Clone)]
pub struct DeviationRecorder {
    ground_truth: f64,
    deviations: [Vec<f64>; 8],
}

impl DeviationRecorder {
    pub fn new(ground_truth: f64, repetitions: usize) -> Self {
        Self {
            ground_truth,
            deviations: std::array::from_fn(|_| Vec::with_capacity(repetitions)),
        }
    }

    /// Evaluates every measure on `subsample` and stores its deviation.
    pub fn record(&mut self, subsample: &[f64]) {
        for measure in UncertaintyMeasure::ALL {
            let estimate = measure.estimate(subsample);
            self.deviations[measure.index()]
                .push(fractional_deviation(estimate.uncertainty, self.ground_truth));
        }
    }

    /// Number of recorded subsamples.
    pub fn len(&self) -> usize {
        self.deviations[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn finish(self) -> DeviationDistributions {
        DeviationDistributions {
            deviations: self.deviations,
        }
    }
}

/// One deviation distribution per measure, each with one entry per
/// repetition.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviationDistributions {
    deviations: [Vec<f64>; 8],
}

impl DeviationDistributions {
    pub fn get(&self, measure: UncertaintyMeasure) -> &[f64] {
        &self.deviations[measure.index()]
    }

    pub fn repetitions(&self) -> usize {
        self.deviations[0].len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (UncertaintyMeasure, &[f64])> + '_ {
        UncertaintyMeasure::ALL
            .into_iter()
            .map(|m| (m, self.deviations[m.index()].as_slice()))
    }

    /// Mean and sample standard deviation of each distribution.
    pub fn summarize(&self) -> DeviationSummary {
        DeviationSummary {
            entries: std::array::from_fn(|i| stddev(&self.deviations[i], StdDevMode::Sample)),
        }
    }

    pub fn into_vecs(self) -> [Vec<f64>; 8] {
        self.deviations
    }
}

/// Mean and spread of each measure's deviation distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationSummary {
    entries: [Estimate; 8],
}

impl DeviationSummary {
    pub fn get(&self, measure: UncertaintyMeasure) -> Estimate {
        self.entries[measure.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (UncertaintyMeasure, Estimate)> + '_ {
        UncertaintyMeasure::ALL
            .into_iter()
            .map(|m| (m, self.entries[m.index()]))
    }

    /// `(mean, uncertainty)` pairs flattened in canonical measure order.
    pub fn to_flat(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (i, e) in self.entries.iter().enumerate() {
            out[2 * i] = e.mean;
            out[2 * i + 1] = e.uncertainty;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deviation_is_relative_to_truth() {
        assert_eq!(fractional_deviation(30.0, 20.0), 0.5);
        assert_eq!(fractional_deviation(15.0, 20.0), -0.25);
        assert_eq!(fractional_deviation(20.0, 20.0), 0.0);
    }

    #[test]
    fn records_one_entry_per_measure_per_subsample() {
        let mut rec = DeviationRecorder::new(2.0, 3);
        assert!(rec.is_empty());
        rec.record(&[1.0, 2.0, 3.0, 4.0]);
        rec.record(&[5.0, 5.0, 5.0, 5.0]);
        assert_eq!(rec.len(), 2);

        let d = rec.finish();
        assert_eq!(d.repetitions(), 2);
        for (m, values) in d.iter() {
            assert_eq!(values.len(), 2, "{m}");
            // constant subsample: zero uncertainty, deviation -1
            assert_eq!(values[1], -1.0, "{m}");
        }
        // minmax of 1..4 is 1.5, deviation (1.5 - 2) / 2
        assert_eq!(d.get(UncertaintyMeasure::MinMax)[0], -0.25);
    }

    #[test]
    fn summary_flattens_in_canonical_order() {
        let mut rec = DeviationRecorder::new(1.0, 4);
        for s in [[1.0, 2.0, 3.0, 4.0], [0.0, 2.0, 4.0, 6.0], [3.0, 3.0, 3.0, 9.0]] {
            rec.record(&s);
        }
        let d = rec.finish();
        let summary = d.summarize();
        let flat = summary.to_flat();
        for (m, e) in summary.iter() {
            let direct = stddev(d.get(m), StdDevMode::Sample);
            assert_eq!(e, direct);
            assert_eq!(flat[2 * m.index()], e.mean);
            assert_eq!(flat[2 * m.index() + 1], e.uncertainty);
            assert!(e.uncertainty >= 0.0);
        }
    }
}
