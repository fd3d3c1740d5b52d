use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::core::{Estimate, SimulationError};
use crate::measures::{StdDevMode, stddev};

/// Fixed, seeded sample drawn once from a Gaussian distribution.
///
/// Every subsample of a run is drawn from these values and every measure is
/// judged against [`ground_truth`](Population::ground_truth), the sample
/// standard deviation of the whole set.
#[derive(Debug, Clone)]
pub struct Population {
    values: Vec<f64>,
    ground_truth: Estimate,
}

impl Population {
    pub fn gaussian(
        mean: f64,
        std_dev: f64,
        size: usize,
        seed: u64,
    ) -> Result<Self, SimulationError> {
        if !mean.is_finite() {
            return Err(SimulationError::InvalidParameter(format!(
                "population mean must be finite, got {mean}"
            )));
        }
        if !(std_dev.is_finite() && std_dev > 0.0) {
            return Err(SimulationError::InvalidParameter(format!(
                "population standard deviation must be finite and > 0, got {std_dev}"
            )));
        }
        if size < 2 {
            return Err(SimulationError::InvalidParameter(format!(
                "population needs at least 2 values, got {size}"
            )));
        }

        let normal = Normal::new(mean, std_dev)
            .map_err(|e| SimulationError::InvalidParameter(e.to_string()))?;
        let mut rng = StdRng::seed_from_u64(seed);
        let values: Vec<f64> = (0..size).map(|_| normal.sample(&mut rng)).collect();

        Self::from_values(values)
    }

    /// Wraps an existing sample, e.g. one loaded back from an artifact.
    pub fn from_values(values: Vec<f64>) -> Result<Self, SimulationError> {
        if values.len() < 2 {
            return Err(SimulationError::InvalidParameter(format!(
                "population needs at least 2 values, got {}",
                values.len()
            )));
        }
        let ground_truth = stddev(&values, StdDevMode::Sample);
        if !(ground_truth.uncertainty.is_finite() && ground_truth.uncertainty > 0.0) {
            return Err(SimulationError::DegenerateGroundTruth(
                ground_truth.uncertainty,
            ));
        }
        Ok(Self {
            values,
            ground_truth,
        })
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Mean and sample standard deviation of the whole population.
    #[inline]
    pub fn ground_truth(&self) -> Estimate {
        self.ground_truth
    }
}
