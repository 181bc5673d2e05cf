//! File transport
//!
//! Appends each line and fsyncs before returning, so every line that was
//! logged survives the process being killed right afterwards.

use crate::core::{LogRecord, LoggerError, Result, Transport};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::os::unix::fs::OpenOptionsExt;
use std::path::{Path, PathBuf};

/// rw for owner and group
pub const LOG_FILE_MODE: u32 = 0o660;

pub struct FileTransport {
    file: Option<File>,
    path: PathBuf,
}

impl FileTransport {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .mode(LOG_FILE_MODE)
            .open(&path)
            .map_err(LoggerError::open_log_file)?;

        Ok(Self {
            file: Some(file),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Transport for FileTransport {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()> {
        let Some(file) = self.file.as_mut() else {
            return Ok(());
        };

        file.write_all(record.message.as_bytes())
            .map_err(|e| LoggerError::write("file", e))?;
        file.sync_all().map_err(|e| LoggerError::write("file", e))
    }

    fn name(&self) -> &str {
        "file"
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the handle closes the descriptor.
        self.file.take();
        Ok(())
    }
}
