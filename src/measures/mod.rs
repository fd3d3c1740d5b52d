//! The eight small-sample uncertainty measures.
//!
//! Each measure maps a sample to an [`Estimate`](crate::core::Estimate)
//! whose `mean` is the plain arithmetic mean of the sample and whose
//! `uncertainty` follows a measure-specific rule. The free functions are the
//! measures themselves; [`UncertaintyMeasure`] names them and fixes their
//! canonical order.
//!
//! All measures support samples of 4 or more values. `stddev` only needs 2.

mod fraction;
mod measure;
mod quartile;
mod spread;
mod trimmed;

pub use fraction::{
    CLOSE68_FRACTION, PERCMEAS_FRACTION, close68, closest_fraction_count, percmeas,
    retain_closest_to_mean,
};
pub use measure::UncertaintyMeasure;
pub use quartile::{iqr, quartile_bounds};
pub use spread::{StdDevMode, mad, minmax, stddev};
pub use trimmed::{EXTREMES_EXCLUDED, MIDDLE_PERCENTAGE, exclextr, middle};

/// Smallest subsample every measure handles.
pub const MIN_SAMPLE_SIZE: usize = 4;
