//! Transport trait for log output destinations

use super::{error::Result, log_entry::LogRecord};

pub trait Transport: Send {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()>;
    fn name(&self) -> &str;

    /// Release the underlying resource. Called at most once by the logger.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}
