use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, BufWriter, Error, Write};
use std::path::{Path, PathBuf};

use crate::artifacts::TableFormat;
use crate::core::SimulationError;

/// A result set persisted as one JSON file inside an artifacts directory.
pub trait Artifact: Serialize + DeserializeOwned {
    /// File name inside the artifacts directory.
    const FILE_NAME: &'static str;

    fn path_in<P: AsRef<Path>>(dir: P) -> PathBuf {
        dir.as_ref().join(Self::FILE_NAME)
    }

    /// Where [`Artifact::export_in`] puts the `fmt` table.
    fn table_path_in<P: AsRef<Path>>(dir: P, fmt: TableFormat) -> PathBuf {
        Self::path_in(dir).with_extension(fmt.extension())
    }

    /// Writes the artifact as a delimited table to `path`.
    fn export<P: AsRef<Path>>(&self, path: P, fmt: TableFormat) -> Result<(), Error>;

    /// Exports next to the JSON file in `dir` and returns the table path.
    fn export_in<P: AsRef<Path>>(&self, dir: P, fmt: TableFormat) -> Result<PathBuf, SimulationError> {
        let path = Self::table_path_in(dir, fmt);
        self.export(&path, fmt)?;
        Ok(path)
    }

    /// Writes the artifact into `dir`, creating the directory if needed.
    fn save<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf, SimulationError> {
        std::fs::create_dir_all(dir.as_ref())?;
        let path = Self::path_in(dir);
        let mut w = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut w, self)?;
        w.flush()?;
        Ok(path)
    }

    fn load<P: AsRef<Path>>(dir: P) -> Result<Self, SimulationError> {
        let r = BufReader::new(File::open(Self::path_in(dir))?);
        Ok(serde_json::from_reader(r)?)
    }

    /// Like [`Artifact::load`], but a missing file is `Ok(None)`.
    fn load_if_present<P: AsRef<Path>>(dir: P) -> Result<Option<Self>, SimulationError> {
        match Self::load(dir) {
            Ok(a) => Ok(Some(a)),
            Err(SimulationError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
