use std::fmt::{Display, Formatter, Result};

use crate::artifacts::{DistributionsArtifact, SweepArtifact};
use crate::measures::{StdDevMode, UncertaintyMeasure, stddev};

/// One line of the summary table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub measure: UncertaintyMeasure,
    /// Mean deviation over all repetitions.
    pub mean: f64,
    /// `sd / sqrt(subsample_size)`.
    pub sdom: f64,
    pub sd: f64,
    /// Sweep uncertainty at the reference subsample size.
    pub reference: Option<f64>,
}

impl Display for SummaryRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:<13}{:>7.2}{:>7.2}{:>7.2}",
            self.measure.label(),
            self.mean,
            self.sdom,
            self.sd
        )?;
        match self.reference {
            Some(r) => write!(f, "{r:>8.2}"),
            None => write!(f, "{:>8}", "-"),
        }
    }
}

/// Smallest and largest sweep uncertainty of one measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UncertaintyRange {
    pub measure: UncertaintyMeasure,
    pub min: f64,
    pub max: f64,
}

impl Display for UncertaintyRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:<13}{:.2} - {:.2}",
            self.measure.label(),
            self.min,
            self.max
        )
    }
}

/// Textual digest of the distribution and sweep studies.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub reference_size: usize,
    pub rows: Vec<SummaryRow>,
    pub ranges: Vec<UncertaintyRange>,
}

impl SummaryTable {
    pub fn new(
        distributions: &DistributionsArtifact,
        sweep: Option<&SweepArtifact>,
        reference_size: usize,
    ) -> Self {
        let norm = (distributions.subsample_size as f64).sqrt();

        let rows = UncertaintyMeasure::ALL
            .into_iter()
            .filter_map(|m| {
                let deviations = distributions.get(m)?;
                let e = stddev(deviations, StdDevMode::Sample);
                Some(SummaryRow {
                    measure: m,
                    mean: e.mean,
                    sdom: e.uncertainty / norm,
                    sd: e.uncertainty,
                    reference: sweep.and_then(|s| s.uncertainty_at(m, reference_size)),
                })
            })
            .collect();

        let ranges = sweep
            .map(|s| {
                UncertaintyMeasure::ALL
                    .into_iter()
                    .filter_map(|m| {
                        let uncs = s.uncertainties(m).filter(|u| !u.is_empty())?;
                        let (min, max) = uncs
                            .iter()
                            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &u| {
                                (lo.min(u), hi.max(u))
                            });
                        Some(UncertaintyRange {
                            measure: m,
                            min,
                            max,
                        })
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            reference_size,
            rows,
            ranges,
        }
    }

    pub fn row(&self, measure: UncertaintyMeasure) -> Option<&SummaryRow> {
        self.rows.iter().find(|r| r.measure == measure)
    }
}

impl Display for SummaryTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let reference = format!("SD({})", self.reference_size);
        writeln!(
            f,
            "{:<13}{:>7}{:>7}{:>7}{:>8}",
            "", "Mean", "SDOM", "SD", reference
        )?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        if !self.ranges.is_empty() {
            writeln!(f)?;
            writeln!(f, "Range of uncertainties")?;
            for range in &self.ranges {
                writeln!(f, "{range}")?;
            }
        }
        Ok(())
    }
}
