use std::io::Write;
use std::path::PathBuf;

use crate::domain::ports::sink::{SampleSink, SinkError};

/// Append-only CSV sink backed by a file.
///
/// The file is opened in append mode for every write and released
/// immediately, so a restarted process picks up where the previous one
/// left off without clobbering prior rows. Emptiness is probed through
/// metadata, never by opening the file for reading.
pub struct CsvSink {
    path: PathBuf,
}

impl CsvSink {
    #[must_use]
    pub fn new(path: &str) -> Self {
        let expanded = shellexpand::tilde(path);
        Self {
            path: PathBuf::from(expanded.as_ref()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SampleSink for CsvSink {
    fn is_empty(&self) -> Result<bool, SinkError> {
        match std::fs::metadata(&self.path) {
            Ok(meta) => Ok(meta.len() == 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(SinkError::ProbeFailed(format!(
                "{} : {e}",
                self.path.display()
            ))),
        }
    }

    fn append(&self, line: &str) -> Result<(), SinkError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SinkError::WriteFailed(format!(
                        "impossible de créer le répertoire parent : {e}"
                    ))
                })?;
            }
        }

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| SinkError::WriteFailed(format!("{} : {e}", self.path.display())))?;

        writeln!(file, "{line}")
            .map_err(|e| SinkError::WriteFailed(format!("{} : {e}", self.path.display())))
    }
}
