use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Error;
use std::path::Path;

use crate::artifacts::table::{measure_columns, repetition_index, write_columns};
use crate::artifacts::{Artifact, DistributionsArtifact, TableFormat};
use crate::evaluation::convergence_trace;
use crate::measures::UncertaintyMeasure;

/// Running mean of every measure's deviations, one entry per repetition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConvergenceArtifact {
    pub subsample_size: usize,
    #[serde(flatten)]
    pub traces: BTreeMap<String, Vec<f64>>,
}

impl ConvergenceArtifact {
    pub fn from_distributions(distributions: &DistributionsArtifact) -> Self {
        let traces = distributions
            .deviations
            .iter()
            .map(|(name, values)| (name.clone(), convergence_trace(values)))
            .collect();
        Self {
            subsample_size: distributions.subsample_size,
            traces,
        }
    }

    pub fn get(&self, measure: UncertaintyMeasure) -> Option<&[f64]> {
        self.traces.get(measure.name()).map(Vec::as_slice)
    }
}

impl Artifact for ConvergenceArtifact {
    const FILE_NAME: &'static str = "convergence.json";

    /// One row per prefix length, one column per measure.
    fn export<P: AsRef<Path>>(&self, path: P, fmt: TableFormat) -> Result<(), Error> {
        let columns = measure_columns(|m| self.get(m));
        let rows = columns.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
        write_columns(
            path,
            fmt.delimiter(),
            "repetitions",
            &repetition_index(rows),
            &columns,
        )
    }
}
