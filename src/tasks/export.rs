use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::artifacts::{
    Artifact, ConvergenceArtifact, DistributionsArtifact, SweepArtifact, TableFormat,
};
use crate::core::SimulationError;

/// Converts every JSON artifact found in `dir` into a delimited table next to it.
///
/// Missing artifacts are skipped; the written tables are returned.
pub fn export_tables<P: AsRef<Path>>(
    dir: P,
    fmt: TableFormat,
) -> Result<Vec<PathBuf>, SimulationError> {
    let dir = dir.as_ref();
    let mut written = Vec::new();

    if let Some(a) = DistributionsArtifact::load_if_present(dir)? {
        written.push(a.export_in(dir, fmt)?);
    }
    if let Some(a) = ConvergenceArtifact::load_if_present(dir)? {
        written.push(a.export_in(dir, fmt)?);
    }
    if let Some(a) = SweepArtifact::load_if_present(dir)? {
        written.push(a.export_in(dir, fmt)?);
    }

    if written.is_empty() {
        warn!(dir = %dir.display(), "no artifacts to export");
    }
    for path in &written {
        info!(path = %path.display(), "table written");
    }
    Ok(written)
}
