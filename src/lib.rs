//! # lm_log
//!
//! Diagnostic logging for system daemons. Events are filtered by a severity
//! mask, formatted into a single line and written to exactly one backend
//! chosen at startup: a plain file, syslog, or the systemd journal.
//!
//! ## Features
//!
//! - **Single backend**: journal, then file, then syslog, picked once by
//!   [`Logger::setup`]
//! - **Durable files**: every line is fsynced before the call returns
//! - **Structured journal fields**: `CODE_FILE`, `CODE_LINE` and `CODE_FUNC`
//!   are split out of the call site
//! - **One stream**: records from the `log` facade are bridged into the same
//!   backend
//!
//! ```no_run
//! use lm_log::prelude::*;
//! use lm_log::info;
//!
//! let config = LogConfig::new().with_level("debug").with_file("/var/log/lm.log");
//! let logger = Logger::setup(&config)?;
//! info!(logger, "started with {} satellites", 4);
//! logger.shutdown();
//! # Ok::<(), LoggerError>(())
//! ```

pub mod backends;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::backends::{Backend, BackendKind, MemoryTransport};
    pub use crate::core::{
        ErrorKind, FormatterConfig, HostLevel, LevelMask, LogConfig, LogRecord, Logger,
        LoggerBuilder, LoggerError, LoggerMetrics, Priority, Result, Severity, TimestampMode,
        Transport,
    };
}

pub use crate::backends::{Backend, BackendKind};
pub use crate::core::{
    ErrorKind, FormatterConfig, HostLevel, LevelMask, LogConfig, LogRecord, Logger,
    LoggerBuilder, LoggerError, LoggerMetrics, Priority, Result, Severity, TimestampMode,
    Transport,
};
