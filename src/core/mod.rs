//! Core logger types and traits

pub mod bridge;
pub mod config;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod priority;
pub mod timestamp;
pub mod transport;

pub use config::LogConfig;
pub use error::{ErrorKind, LoggerError, Result};
pub use formatter::{FormatterConfig, LineFormatter};
pub use log_entry::LogRecord;
pub use log_level::{LevelMask, Severity};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use priority::{HostLevel, Priority};
pub use timestamp::TimestampMode;
pub use transport::Transport;
