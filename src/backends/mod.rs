//! Transport backends
//!
//! A logger writes to exactly one [`Backend`], chosen when it is built.

pub mod file;
#[cfg(feature = "journal")]
pub mod journal;
pub mod memory;
pub mod syslog;

pub use file::FileTransport;
#[cfg(feature = "journal")]
pub use journal::JournalTransport;
pub use memory::{CapturedRecord, MemoryTransport};
pub use syslog::SyslogTransport;

use crate::core::{LogRecord, Result, Transport};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    File,
    Syslog,
    Journal,
    Custom,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::File => "file",
            BackendKind::Syslog => "syslog",
            BackendKind::Journal => "journal",
            BackendKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

pub enum Backend {
    File(FileTransport),
    Syslog(SyslogTransport),
    #[cfg(feature = "journal")]
    Journal(JournalTransport),
    Custom(Box<dyn Transport>),
}

impl Backend {
    pub fn custom<T: Transport + 'static>(transport: T) -> Self {
        Backend::Custom(Box::new(transport))
    }

    pub fn kind(&self) -> BackendKind {
        match self {
            Backend::File(_) => BackendKind::File,
            Backend::Syslog(_) => BackendKind::Syslog,
            #[cfg(feature = "journal")]
            Backend::Journal(_) => BackendKind::Journal,
            Backend::Custom(_) => BackendKind::Custom,
        }
    }

    /// The journal carries priority as a field, so text tags are redundant there.
    pub fn wants_severity_tag(&self) -> bool {
        self.kind() != BackendKind::Journal
    }

    fn transport_mut(&mut self) -> &mut dyn Transport {
        match self {
            Backend::File(t) => t,
            Backend::Syslog(t) => t,
            #[cfg(feature = "journal")]
            Backend::Journal(t) => t,
            Backend::Custom(t) => t.as_mut(),
        }
    }
}

impl Transport for Backend {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()> {
        self.transport_mut().write(record)
    }

    fn name(&self) -> &str {
        match self {
            Backend::File(t) => t.name(),
            Backend::Syslog(t) => t.name(),
            #[cfg(feature = "journal")]
            Backend::Journal(t) => t.name(),
            Backend::Custom(t) => t.name(),
        }
    }

    fn close(&mut self) -> Result<()> {
        self.transport_mut().close()
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Backend").field(&self.name()).finish()
    }
}
