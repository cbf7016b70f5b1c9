//! Output table persistence
//!
//! The table is written to a temporary file next to the target and renamed
//! into place, so a failed write never leaves a half-written CSV behind.

use crate::error::{MarkerOcrError, Result};
use marker_ocr_common::{write_csv, ExtractionRecord};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

pub trait TableWriter {
    /// Persists all records, replacing any previous output.
    fn write(&self, records: &[ExtractionRecord]) -> Result<()>;

    /// Where the table ends up, for reporting.
    fn location(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn write_inner(&self, records: &[ExtractionRecord]) -> std::io::Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent)?;

        let mut temp = tempfile::NamedTempFile::new_in(parent)?;
        write_csv(BufWriter::new(temp.as_file_mut()), records)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl TableWriter for CsvFile {
    fn write(&self, records: &[ExtractionRecord]) -> Result<()> {
        self.write_inner(records)
            .map_err(|e| MarkerOcrError::Persistence(format!("{}: {}", self.path.display(), e)))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
