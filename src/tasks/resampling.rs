use rand::Rng;
use rand::seq::index;
use tracing::debug;

use crate::core::{Population, SimulationError};
use crate::evaluation::{DeviationDistributions, DeviationRecorder, DeviationSummary};
use crate::measures::MIN_SAMPLE_SIZE;

/// Result of [`ResamplingEngine::draw_set`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOutcome {
    Distributions(DeviationDistributions),
    Summary(DeviationSummary),
}

/// Repeatedly draws subsamples without replacement from a fixed population
/// and measures how far each uncertainty measure lands from the population's
/// ground-truth standard deviation.
#[derive(Debug, Clone)]
pub struct ResamplingEngine {
    population: Population,
    real_stddev: f64,
}

impl ResamplingEngine {
    pub fn new(population: Population) -> Self {
        let real_stddev = population.ground_truth().uncertainty;
        Self {
            population,
            real_stddev,
        }
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Ground-truth standard deviation every deviation is relative to.
    pub fn real_stddev(&self) -> f64 {
        self.real_stddev
    }

    /// Runs `repetitions` draws of `subsample_size` values.
    ///
    /// With `return_distribution` the raw per-measure deviations are
    /// returned, otherwise their mean and sample standard deviation.
    pub fn draw_set<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        repetitions: usize,
        subsample_size: usize,
        return_distribution: bool,
    ) -> Result<DrawOutcome, SimulationError> {
        if return_distribution {
            self.draw_distributions(rng, repetitions, subsample_size)
                .map(DrawOutcome::Distributions)
        } else {
            self.draw_summary(rng, repetitions, subsample_size)
                .map(DrawOutcome::Summary)
        }
    }

    pub fn draw_distributions<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        repetitions: usize,
        subsample_size: usize,
    ) -> Result<DeviationDistributions, SimulationError> {
        self.check_request(repetitions, 1, subsample_size)?;

        let values = self.population.values();
        let mut recorder = DeviationRecorder::new(self.real_stddev, repetitions);
        let mut subsample = Vec::with_capacity(subsample_size);

        for _ in 0..repetitions {
            subsample.clear();
            subsample.extend(
                index::sample(rng, values.len(), subsample_size)
                    .into_iter()
                    .map(|i| values[i]),
            );
            recorder.record(&subsample);
        }

        debug!(
            repetitions,
            subsample_size,
            recorded = recorder.len(),
            "resampling finished"
        );
        Ok(recorder.finish())
    }

    /// Needs at least two repetitions for the spread of the deviations.
    pub fn draw_summary<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        repetitions: usize,
        subsample_size: usize,
    ) -> Result<DeviationSummary, SimulationError> {
        self.check_request(repetitions, 2, subsample_size)?;
        Ok(self
            .draw_distributions(rng, repetitions, subsample_size)?
            .summarize())
    }

    fn check_request(
        &self,
        repetitions: usize,
        min_repetitions: usize,
        subsample_size: usize,
    ) -> Result<(), SimulationError> {
        if subsample_size > self.population.len() {
            return Err(SimulationError::SubsampleTooLarge {
                requested: subsample_size,
                available: self.population.len(),
            });
        }
        if subsample_size < MIN_SAMPLE_SIZE {
            return Err(SimulationError::SubsampleTooSmall {
                requested: subsample_size,
                minimum: MIN_SAMPLE_SIZE,
            });
        }
        if repetitions < min_repetitions {
            return Err(SimulationError::TooFewRepetitions {
                requested: repetitions,
                minimum: min_repetitions,
            });
        }
        Ok(())
    }
}
