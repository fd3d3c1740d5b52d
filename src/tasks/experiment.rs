use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::artifacts::{
    Artifact, ConvergenceArtifact, DistributionsArtifact, SweepArtifact, TableFormat,
};
use crate::core::{Population, SimulationError};
use crate::measures::MIN_SAMPLE_SIZE;
use crate::tasks::{ExperimentParams, ResamplingEngine};

/// Artifacts produced by one [`ExperimentDriver::run`], with the files they
/// were written to.
#[derive(Debug, Clone, Default)]
pub struct ExperimentOutcome {
    pub distributions: Option<DistributionsArtifact>,
    pub convergence: Option<ConvergenceArtifact>,
    pub sweep: Option<SweepArtifact>,
    pub written: Vec<PathBuf>,
}

/// Runs the distribution, convergence and sample-size sweep studies on one
/// seeded population.
pub struct ExperimentDriver {
    params: ExperimentParams,
    engine: ResamplingEngine,
    rng: StdRng,
}

impl TryFrom<ExperimentParams> for ExperimentDriver {
    type Error = SimulationError;

    fn try_from(params: ExperimentParams) -> Result<Self, Self::Error> {
        let available = params.population_size;
        let mut min_repetitions = 1;

        if params.calculate_distributions {
            let size = params.distribution_subsample_size;
            check_sizes(size, size, available)?;
        }
        if params.calculate_sample_size_sweep {
            if params.sweep_min_size > params.sweep_max_size {
                return Err(SimulationError::EmptySweep {
                    min: params.sweep_min_size,
                    max: params.sweep_max_size,
                });
            }
            check_sizes(params.sweep_min_size, params.sweep_max_size, available)?;
            min_repetitions = 2;
        }
        if params.repetitions < min_repetitions {
            return Err(SimulationError::TooFewRepetitions {
                requested: params.repetitions,
                minimum: min_repetitions,
            });
        }

        let population = Population::gaussian(
            params.population_mean,
            params.population_std_dev,
            params.population_size,
            params.population_seed,
        )?;
        let rng = match params.subsample_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            engine: ResamplingEngine::new(population),
            params,
            rng,
        })
    }
}

/// Every subsample size in `smallest..=largest` must be drawable.
fn check_sizes(smallest: usize, largest: usize, available: usize) -> Result<(), SimulationError> {
    if smallest < MIN_SAMPLE_SIZE {
        return Err(SimulationError::SubsampleTooSmall {
            requested: smallest,
            minimum: MIN_SAMPLE_SIZE,
        });
    }
    if largest > available {
        return Err(SimulationError::SubsampleTooLarge {
            requested: largest,
            available,
        });
    }
    Ok(())
}

impl ExperimentDriver {
    pub fn params(&self) -> &ExperimentParams {
        &self.params
    }

    pub fn engine(&self) -> &ResamplingEngine {
        &self.engine
    }

    /// Runs every enabled study and persists its artifact to `output_dir`.
    ///
    /// Studies run in order and the first failure aborts the run.
    pub fn run(&mut self) -> Result<ExperimentOutcome, SimulationError> {
        let truth = self.engine.population().ground_truth();
        info!(
            size = self.engine.population().len(),
            mean = truth.mean,
            stddev = truth.uncertainty,
            "population ready"
        );

        let out_dir = PathBuf::from(&self.params.output_dir);
        let mut outcome = ExperimentOutcome::default();

        if self.params.calculate_distributions {
            let distributions = self.distribution_study()?;
            outcome
                .written
                .extend(self.persist(&distributions, &out_dir)?);

            if self.params.calculate_convergence {
                let convergence = Self::convergence_study(&distributions);
                outcome
                    .written
                    .extend(self.persist(&convergence, &out_dir)?);
                outcome.convergence = Some(convergence);
            }
            outcome.distributions = Some(distributions);
        } else if self.params.calculate_convergence {
            warn!("convergence study needs the distribution study, skipping");
        }

        if self.params.calculate_sample_size_sweep {
            let sweep = self.sweep_study()?;
            outcome
                .written
                .extend(self.persist(&sweep, &out_dir)?);
            outcome.sweep = Some(sweep);
        }

        Ok(outcome)
    }

    /// Full deviation distributions at the configured subsample size.
    pub fn distribution_study(&mut self) -> Result<DistributionsArtifact, SimulationError> {
        let size = self.params.distribution_subsample_size;
        info!(
            repetitions = self.params.repetitions,
            subsample_size = size,
            "distribution study"
        );
        let distributions =
            self.engine
                .draw_distributions(&mut self.rng, self.params.repetitions, size)?;
        Ok(DistributionsArtifact::new(
            distributions,
            self.engine.population().values().to_vec(),
            size,
        ))
    }

    /// Running mean of every distribution.
    pub fn convergence_study(distributions: &DistributionsArtifact) -> ConvergenceArtifact {
        info!(
            repetitions = distributions.repetitions(),
            "convergence study"
        );
        ConvergenceArtifact::from_distributions(distributions)
    }

    /// Mean and spread of the deviations for every size of the sweep.
    pub fn sweep_study(&mut self) -> Result<SweepArtifact, SimulationError> {
        let sizes = self.params.sweep_min_size..=self.params.sweep_max_size;
        let mut sweep = SweepArtifact::with_capacity(sizes.clone().count());
        for size in sizes {
            let summary =
                self.engine
                    .draw_summary(&mut self.rng, self.params.repetitions, size)?;
            info!(subsample_size = size, "sweep step done");
            sweep.push(size, &summary);
        }
        Ok(sweep)
    }

    fn persist<A: Artifact>(&self, artifact: &A, dir: &Path) -> Result<Vec<PathBuf>, SimulationError> {
        let mut written = vec![artifact.save(dir)?];
        if self.params.write_tables {
            written.push(artifact.export_in(dir, TableFormat::Csv)?);
        }
        for path in &written {
            info!(path = %path.display(), "artifact written");
        }
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::{StdDevMode, UncertaintyMeasure, stddev};
    use tempfile::tempdir;

    fn small_params(dir: &Path) -> ExperimentParams {
        ExperimentParams {
            repetitions: 400,
            sweep_min_size: 4,
            sweep_max_size: 8,
            subsample_seed: Some(99),
            output_dir: dir.to_string_lossy().into_owned(),
            ..ExperimentParams::default()
        }
    }

    #[test]
    fn invalid_configurations_are_rejected() {
        let dir = tempdir().unwrap();
        let base = small_params(dir.path());

        let p = ExperimentParams {
            sweep_min_size: 9,
            sweep_max_size: 8,
            ..base.clone()
        };
        assert!(matches!(
            ExperimentDriver::try_from(p),
            Err(SimulationError::EmptySweep { min: 9, max: 8 })
        ));

        let p = ExperimentParams {
            sweep_min_size: 3,
            ..base.clone()
        };
        assert!(matches!(
            ExperimentDriver::try_from(p),
            Err(SimulationError::SubsampleTooSmall { requested: 3, .. })
        ));

        let p = ExperimentParams {
            population_size: 6,
            ..base.clone()
        };
        assert!(matches!(
            ExperimentDriver::try_from(p),
            Err(SimulationError::SubsampleTooLarge { .. })
        ));

        let p = ExperimentParams {
            population_std_dev: 0.0,
            ..base
        };
        assert!(matches!(
            ExperimentDriver::try_from(p),
            Err(SimulationError::InvalidParameter(_))
        ));
    }

    #[test]
    fn full_run_writes_all_three_artifacts() {
        let dir = tempdir().unwrap();
        let p = ExperimentParams {
            sweep_max_size: 10,
            ..small_params(dir.path())
        };
        let mut driver = ExperimentDriver::try_from(p).unwrap();
        let outcome = driver.run().unwrap();

        let d = outcome.distributions.as_ref().unwrap();
        assert_eq!(d.subsample_size, 10);
        assert_eq!(d.population.len(), 1000);
        for m in UncertaintyMeasure::ALL {
            assert_eq!(d.get(m).unwrap().len(), 400, "{m}");
        }

        let c = outcome.convergence.as_ref().unwrap();
        let last = *c.get(UncertaintyMeasure::StdDev).unwrap().last().unwrap();
        let direct = stddev(d.get(UncertaintyMeasure::StdDev).unwrap(), StdDevMode::Population).mean;
        assert!((last - direct).abs() < 1e-12);

        let s = outcome.sweep.as_ref().unwrap();
        assert_eq!(s.subsample_sizes, vec![4, 5, 6, 7, 8, 9, 10]);
        let at_ten = s.uncertainty_at(UncertaintyMeasure::StdDev, 10).unwrap();
        assert!(at_ten > 0.0, "sweep uncertainty at 10 = {at_ten}");
        for m in UncertaintyMeasure::ALL {
            assert_eq!(s.means(m).unwrap().len(), 7);
            assert!(s.uncertainties(m).unwrap().iter().all(|&u| u > 0.0));
        }

        assert_eq!(outcome.written.len(), 3);
        assert_eq!(&DistributionsArtifact::load(dir.path()).unwrap(), d);
        assert_eq!(&ConvergenceArtifact::load(dir.path()).unwrap(), c);
        assert_eq!(&SweepArtifact::load(dir.path()).unwrap(), s);
    }

    #[test]
    fn single_repetition_is_enough_without_sweep() {
        let dir = tempdir().unwrap();
        let p = ExperimentParams {
            repetitions: 1,
            calculate_sample_size_sweep: false,
            ..small_params(dir.path())
        };
        let outcome = ExperimentDriver::try_from(p.clone()).unwrap().run().unwrap();
        let d = outcome.distributions.unwrap();
        assert_eq!(d.repetitions(), 1);
        let c = outcome.convergence.unwrap();
        let trace = c.get(UncertaintyMeasure::Mad).unwrap();
        assert_eq!(trace, d.get(UncertaintyMeasure::Mad).unwrap());

        let with_sweep = ExperimentParams {
            calculate_sample_size_sweep: true,
            ..p
        };
        assert!(matches!(
            ExperimentDriver::try_from(with_sweep),
            Err(SimulationError::TooFewRepetitions { requested: 1, minimum: 2 })
        ));

        let nothing = ExperimentParams {
            repetitions: 0,
            calculate_sample_size_sweep: false,
            ..small_params(dir.path())
        };
        assert!(matches!(
            ExperimentDriver::try_from(nothing),
            Err(SimulationError::TooFewRepetitions { requested: 0, minimum: 1 })
        ));
    }

    #[test]
    fn disabled_studies_skip_their_size_checks() {
        let dir = tempdir().unwrap();
        let sweep_only = ExperimentParams {
            calculate_distributions: false,
            calculate_convergence: false,
            distribution_subsample_size: 5000,
            ..small_params(dir.path())
        };
        assert!(ExperimentDriver::try_from(sweep_only).is_ok());

        let distributions_only = ExperimentParams {
            calculate_sample_size_sweep: false,
            sweep_min_size: 30,
            sweep_max_size: 2,
            ..small_params(dir.path())
        };
        assert!(ExperimentDriver::try_from(distributions_only).is_ok());
    }

    #[test]
    fn toggles_gate_studies_and_tables() {
        let dir = tempdir().unwrap();
        let p = ExperimentParams {
            calculate_distributions: false,
            calculate_convergence: true,
            write_tables: true,
            ..small_params(dir.path())
        };
        let outcome = ExperimentDriver::try_from(p).unwrap().run().unwrap();
        assert!(outcome.distributions.is_none());
        assert!(outcome.convergence.is_none());
        assert!(outcome.sweep.is_some());
        assert_eq!(outcome.written.len(), 2);
        assert!(dir.path().join("development.csv").exists());
        assert!(!dir.path().join("deviations.json").exists());
    }

    #[test]
    fn seeded_runs_repeat_exactly() {
        let dir = tempdir().unwrap();
        let p = ExperimentParams {
            calculate_sample_size_sweep: false,
            calculate_convergence: false,
            repetitions: 100,
            ..small_params(dir.path())
        };
        let a = ExperimentDriver::try_from(p.clone())
            .unwrap()
            .distribution_study()
            .unwrap();
        let b = ExperimentDriver::try_from(p)
            .unwrap()
            .distribution_study()
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn reference_scenario_shapes() {
        let dir = tempdir().unwrap();
        let p = ExperimentParams {
            repetitions: 3000,
            subsample_seed: Some(2),
            ..small_params(dir.path())
        };
        let mut driver = ExperimentDriver::try_from(p).unwrap();
        let truth = driver.engine().real_stddev();
        assert!((truth - 20.0).abs() < 2.0, "truth={truth}");

        let d = driver.distribution_study().unwrap();
        let sd = stddev(d.get(UncertaintyMeasure::StdDev).unwrap(), StdDevMode::Sample);
        assert!(sd.mean < 0.0 && sd.mean > -0.08, "stddev bias={}", sd.mean);
        assert!(sd.uncertainty > 0.0);

        let c = ExperimentDriver::convergence_study(&d);
        let trace = c.get(UncertaintyMeasure::StdDev).unwrap();
        let head = stddev(&trace[..300], StdDevMode::Population).uncertainty;
        let tail = stddev(&trace[trace.len() - 300..], StdDevMode::Population).uncertainty;
        assert!(tail < head, "head={head} tail={tail}");
    }
}
