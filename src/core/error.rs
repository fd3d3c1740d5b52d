use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("subsample of {requested} values requested from a population of {available}")]
    SubsampleTooLarge { requested: usize, available: usize },

    #[error("subsample of {requested} values is below the supported minimum of {minimum}")]
    SubsampleTooSmall { requested: usize, minimum: usize },

    #[error("{requested} repetitions requested, at least {minimum} needed")]
    TooFewRepetitions { requested: usize, minimum: usize },

    #[error("empty sweep range: min size {min} > max size {max}")]
    EmptySweep { min: usize, max: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("ground-truth standard deviation must be finite and > 0, got {0}")]
    DegenerateGroundTruth(f64),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl SimulationError {
    /// True for the "bad input size" family, as opposed to numerical
    /// degeneracy or persistence failures.
    pub fn is_size_error(&self) -> bool {
        matches!(
            self,
            SimulationError::SubsampleTooLarge { .. }
                | SimulationError::SubsampleTooSmall { .. }
                | SimulationError::TooFewRepetitions { .. }
                | SimulationError::EmptySweep { .. }
        )
    }
}
