//! Result sets handed from the experiment driver to reporting: the three
//! persisted artifacts, their delimited-table export and the textual
//! summary table.

mod convergence;
mod distributions;
mod store;
mod summary;
mod sweep;
mod table;

pub use convergence::ConvergenceArtifact;
pub use distributions::DistributionsArtifact;
pub use store::Artifact;
pub use summary::{SummaryRow, SummaryTable, UncertaintyRange};
pub use sweep::{MEANS_SUFFIX, SweepArtifact, UNCS_SUFFIX};
pub use table::TableFormat;
