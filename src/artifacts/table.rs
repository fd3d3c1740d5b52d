use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

use crate::measures::UncertaintyMeasure;

/// Delimited text layout for plotting tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, EnumIter, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TableFormat {
    Csv,
    Tsv,
}

impl TableFormat {
    pub fn delimiter(self) -> char {
        match self {
            TableFormat::Csv => ',',
            TableFormat::Tsv => '\t',
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            TableFormat::Csv => "csv",
            TableFormat::Tsv => "tsv",
        }
    }
}

pub(super) fn write_columns<P: AsRef<Path>>(
    path: P,
    delimiter: char,
    index_name: &str,
    index: &[String],
    columns: &[(String, &[f64])],
) -> Result<(), Error> {
    let mut w = BufWriter::new(File::create(path)?);

    write!(w, "{index_name}")?;
    for (name, _) in columns {
        write!(w, "{delimiter}{name}")?;
    }
    writeln!(w)?;

    for (row, key) in index.iter().enumerate() {
        write!(w, "{key}")?;
        for (_, values) in columns {
            match values.get(row) {
                Some(v) => write!(w, "{delimiter}{v:.12}")?,
                None => write!(w, "{delimiter}")?,
            }
        }
        writeln!(w)?;
    }
    w.flush()
}

pub(super) fn repetition_index(len: usize) -> Vec<String> {
    (1..=len).map(|i| i.to_string()).collect()
}

pub(super) fn measure_columns<'a>(
    lookup: impl Fn(UncertaintyMeasure) -> Option<&'a [f64]>,
) -> Vec<(String, &'a [f64])> {
    UncertaintyMeasure::ALL
        .into_iter()
        .filter_map(|m| lookup(m).map(|v| (m.name().to_string(), v)))
        .collect()
}
