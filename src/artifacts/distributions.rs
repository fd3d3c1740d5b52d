use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Error;
use std::path::Path;

use crate::artifacts::table::{measure_columns, repetition_index, write_columns};
use crate::artifacts::{Artifact, TableFormat};
use crate::evaluation::DeviationDistributions;
use crate::measures::UncertaintyMeasure;

/// Output of the distribution study: every measure's deviation
/// distribution, keyed by measure name, plus the population and subsample
/// size they were drawn with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionsArtifact {
    pub subsample_size: usize,
    pub population: Vec<f64>,
    #[serde(flatten)]
    pub deviations: BTreeMap<String, Vec<f64>>,
}

impl DistributionsArtifact {
    pub fn new(
        distributions: DeviationDistributions,
        population: Vec<f64>,
        subsample_size: usize,
    ) -> Self {
        let deviations = UncertaintyMeasure::ALL
            .into_iter()
            .zip(distributions.into_vecs())
            .map(|(m, values)| (m.name().to_string(), values))
            .collect();
        Self {
            subsample_size,
            population,
            deviations,
        }
    }

    pub fn get(&self, measure: UncertaintyMeasure) -> Option<&[f64]> {
        self.deviations.get(measure.name()).map(Vec::as_slice)
    }

    pub fn repetitions(&self) -> usize {
        self.deviations.values().map(Vec::len).max().unwrap_or(0)
    }
}

impl Artifact for DistributionsArtifact {
    const FILE_NAME: &'static str = "deviations.json";

    /// One row per repetition, one column per measure.
    fn export<P: AsRef<Path>>(&self, path: P, fmt: TableFormat) -> Result<(), Error> {
        let columns = measure_columns(|m| self.get(m));
        write_columns(
            path,
            fmt.delimiter(),
            "repetition",
            &repetition_index(self.repetitions()),
            &columns,
        )
    }
}
