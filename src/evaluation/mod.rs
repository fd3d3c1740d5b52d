mod convergence;
mod deviation;
mod estimators;

pub use convergence::convergence_trace;
pub use deviation::{
    DeviationDistributions, DeviationRecorder, DeviationSummary, fractional_deviation,
};
pub use estimators::{OnlineEstimator, RunningMean};
