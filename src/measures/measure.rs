use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumMessage, EnumString, IntoStaticStr};

use crate::core::Estimate;
use crate::measures::{
    StdDevMode, close68, exclextr, iqr, mad, middle, minmax, percmeas, stddev,
};

/// The studied uncertainty measures, declared in canonical order.
///
/// The lowercase name (`"minmax"`, `"close68"`, ...) is the key used in every
/// persisted artifact; the strum message is the label used in tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    EnumCount,
    EnumString,
    Display,
    IntoStaticStr,
    EnumMessage,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum UncertaintyMeasure {
    #[strum(message = "Min-max")]
    MinMax,
    #[strum(message = "Excl. Extr.")]
    ExclExtr,
    #[strum(message = "Percentage")]
    PercMeas,
    #[strum(message = "Middle 50%")]
    Middle,
    #[strum(message = "MAD")]
    Mad,
    #[strum(message = "IQR")]
    Iqr,
    #[strum(message = "68% meas.")]
    Close68,
    #[strum(message = "Std. Dev.")]
    StdDev,
}

impl UncertaintyMeasure {
    pub const ALL: [UncertaintyMeasure; 8] = [
        UncertaintyMeasure::MinMax,
        UncertaintyMeasure::ExclExtr,
        UncertaintyMeasure::PercMeas,
        UncertaintyMeasure::Middle,
        UncertaintyMeasure::Mad,
        UncertaintyMeasure::Iqr,
        UncertaintyMeasure::Close68,
        UncertaintyMeasure::StdDev,
    ];

    /// Position in the canonical order.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn label(self) -> &'static str {
        strum::EnumMessage::get_message(&self).unwrap_or_else(|| self.name())
    }

    pub fn estimate(self, sample: &[f64]) -> Estimate {
        match self {
            UncertaintyMeasure::MinMax => minmax(sample),
            UncertaintyMeasure::ExclExtr => exclextr(sample),
            UncertaintyMeasure::PercMeas => percmeas(sample),
            UncertaintyMeasure::Middle => middle(sample),
            UncertaintyMeasure::Mad => mad(sample),
            UncertaintyMeasure::Iqr => iqr(sample),
            UncertaintyMeasure::Close68 => close68(sample),
            UncertaintyMeasure::StdDev => stddev(sample, StdDevMode::Sample),
        }
    }
}
