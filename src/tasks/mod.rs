mod experiment;
mod export;
mod params;
mod resampling;
mod summary;

pub use experiment::{ExperimentDriver, ExperimentOutcome};
pub use export::export_tables;
pub use params::{ExperimentParams, SummaryParams};
pub use resampling::{DrawOutcome, ResamplingEngine};
pub use summary::summarize;
