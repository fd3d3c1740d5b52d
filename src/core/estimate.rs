use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Location/dispersion pair produced by every uncertainty measure.
///
/// `mean` is always the arithmetic mean of the untrimmed input, even when the
/// measure derives `uncertainty` from a trimmed subset. `uncertainty` is
/// non-negative for any sample the measure supports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub mean: f64,
    pub uncertainty: f64,
}

impl Estimate {
    #[inline]
    pub fn new(mean: f64, uncertainty: f64) -> Self {
        Self { mean, uncertainty }
    }
}

impl Display for Estimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{:.6} ± {:.6}", self.mean, self.uncertainty)
    }
}
