use tracing::warn;

use crate::artifacts::{Artifact, DistributionsArtifact, SummaryTable, SweepArtifact};
use crate::core::SimulationError;
use crate::tasks::SummaryParams;

/// Loads the persisted artifacts and builds the summary table.
///
/// The distribution artifact is required; a missing sweep artifact only
/// drops the reference column and the range section.
pub fn summarize(params: &SummaryParams) -> Result<SummaryTable, SimulationError> {
    let distributions = DistributionsArtifact::load(&params.artifacts_dir)?;
    let sweep = SweepArtifact::load_if_present(&params.artifacts_dir)?;
    if sweep.is_none() {
        warn!(dir = %params.artifacts_dir, "no sweep artifact found");
    }
    Ok(SummaryTable::new(
        &distributions,
        sweep.as_ref(),
        params.reference_size,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measures::UncertaintyMeasure;
    use crate::tasks::{ExperimentDriver, ExperimentParams};
    use tempfile::tempdir;

    #[test]
    fn summary_from_fresh_run() {
        let dir = tempdir().unwrap();
        let p = ExperimentParams {
            repetitions: 200,
            sweep_min_size: 10,
            sweep_max_size: 12,
            calculate_convergence: false,
            subsample_seed: Some(1),
            output_dir: dir.path().to_string_lossy().into_owned(),
            ..ExperimentParams::default()
        };
        ExperimentDriver::try_from(p).unwrap().run().unwrap();

        let table = summarize(&SummaryParams {
            artifacts_dir: dir.path().to_string_lossy().into_owned(),
            reference_size: 12,
        })
        .unwrap();
        assert_eq!(table.rows.len(), 8);
        assert_eq!(table.ranges.len(), 8);
        let row = table.row(UncertaintyMeasure::StdDev).unwrap();
        assert!(row.reference.is_some_and(|r| r > 0.0));
        assert!(row.sdom < row.sd);
    }

    #[test]
    fn missing_sweep_is_tolerated() {
        let dir = tempdir().unwrap();
        let p = ExperimentParams {
            repetitions: 50,
            calculate_convergence: false,
            calculate_sample_size_sweep: false,
            subsample_seed: Some(1),
            output_dir: dir.path().to_string_lossy().into_owned(),
            ..ExperimentParams::default()
        };
        ExperimentDriver::try_from(p).unwrap().run().unwrap();

        let table = summarize(&SummaryParams {
            artifacts_dir: dir.path().to_string_lossy().into_owned(),
            ..SummaryParams::default()
        })
        .unwrap();
        assert!(table.ranges.is_empty());
        assert!(table.rows.iter().all(|r| r.reference.is_none()));
    }

    #[test]
    fn missing_distributions_is_an_error() {
        let dir = tempdir().unwrap();
        let err = summarize(&SummaryParams {
            artifacts_dir: dir.path().to_string_lossy().into_owned(),
            ..SummaryParams::default()
        })
        .unwrap_err();
        assert!(matches!(err, SimulationError::Io(_)));
    }
}
