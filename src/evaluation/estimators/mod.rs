mod estimator;
mod running_mean;

pub use estimator::OnlineEstimator;
pub use running_mean::RunningMean;
