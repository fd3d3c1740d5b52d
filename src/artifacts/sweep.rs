use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Error;
use std::path::Path;

use crate::artifacts::table::write_columns;
use crate::artifacts::{Artifact, TableFormat};
use crate::evaluation::DeviationSummary;
use crate::measures::UncertaintyMeasure;

pub const MEANS_SUFFIX: &str = "_means";
pub const UNCS_SUFFIX: &str = "_uncs";

/// Mean and spread of each measure's deviation per subsample size.
///
/// Series are keyed `<measure>_means` / `<measure>_uncs` and indexed like
/// `subsample_sizes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepArtifact {
    pub subsample_sizes: Vec<usize>,
    #[serde(flatten)]
    pub series: BTreeMap<String, Vec<f64>>,
}

impl SweepArtifact {
    pub fn with_capacity(sizes: usize) -> Self {
        let mut series = BTreeMap::new();
        for m in UncertaintyMeasure::ALL {
            series.insert(means_key(m), Vec::with_capacity(sizes));
            series.insert(uncs_key(m), Vec::with_capacity(sizes));
        }
        Self {
            subsample_sizes: Vec::with_capacity(sizes),
            series,
        }
    }

    /// Appends the summary obtained for `subsample_size`.
    pub fn push(&mut self, subsample_size: usize, summary: &DeviationSummary) {
        self.subsample_sizes.push(subsample_size);
        for (m, est) in summary.iter() {
            self.series.entry(means_key(m)).or_default().push(est.mean);
            self.series
                .entry(uncs_key(m))
                .or_default()
                .push(est.uncertainty);
        }
    }

    pub fn means(&self, measure: UncertaintyMeasure) -> Option<&[f64]> {
        self.series.get(&means_key(measure)).map(Vec::as_slice)
    }

    pub fn uncertainties(&self, measure: UncertaintyMeasure) -> Option<&[f64]> {
        self.series.get(&uncs_key(measure)).map(Vec::as_slice)
    }

    /// Uncertainty of `measure`'s deviation at `subsample_size`, if swept.
    pub fn uncertainty_at(&self, measure: UncertaintyMeasure, subsample_size: usize) -> Option<f64> {
        let i = self
            .subsample_sizes
            .iter()
            .position(|&s| s == subsample_size)?;
        self.uncertainties(measure)?.get(i).copied()
    }

    pub fn len(&self) -> usize {
        self.subsample_sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsample_sizes.is_empty()
    }
}

fn means_key(m: UncertaintyMeasure) -> String {
    format!("{}{MEANS_SUFFIX}", m.name())
}

fn uncs_key(m: UncertaintyMeasure) -> String {
    format!("{}{UNCS_SUFFIX}", m.name())
}

impl Artifact for SweepArtifact {
    const FILE_NAME: &'static str = "development.json";

    /// One row per subsample size, a means and an uncertainties column per
    /// measure.
    fn export<P: AsRef<Path>>(&self, path: P, fmt: TableFormat) -> Result<(), Error> {
        let mut columns = Vec::with_capacity(2 * UncertaintyMeasure::ALL.len());
        for m in UncertaintyMeasure::ALL {
            if let Some(v) = self.means(m) {
                columns.push((means_key(m), v));
            }
            if let Some(v) = self.uncertainties(m) {
                columns.push((uncs_key(m), v));
            }
        }
        let index: Vec<String> = self.subsample_sizes.iter().map(|s| s.to_string()).collect();
        write_columns(path, fmt.delimiter(), "subsample_size", &index, &columns)
    }
}
