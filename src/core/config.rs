//! Startup configuration
//!
//! Mirrors the options a daemon's command line or config file exposes for
//! logging. Nothing here touches the system until [`Logger::setup`] runs.
//!
//! [`Logger::setup`]: crate::Logger::setup

use super::error::Result;
use super::timestamp::TimestampMode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// ERR, WARN, INFO or DEBUG (any case); empty keeps the default mask
    pub level: Option<String>,
    /// Append to this file instead of syslog
    pub file: Option<PathBuf>,
    /// Send to the systemd journal; wins over `file`
    pub journal: bool,
    /// Prefix wall-clock timestamps
    pub show_timestamps: bool,
    /// Prefix timestamps relative to setup; ignored when `show_timestamps` is set
    pub relative_timestamps: bool,
    /// Prefix `[file:line] function(): `; defaults to the `func-loc` feature
    pub show_location: Option<bool>,
    /// syslog ident; defaults to the program name
    pub syslog_ident: Option<String>,
}

impl LogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_journal(mut self, journal: bool) -> Self {
        self.journal = journal;
        self
    }

    #[must_use]
    pub fn with_timestamps(mut self, wall_clock: bool, relative: bool) -> Self {
        self.show_timestamps = wall_clock;
        self.relative_timestamps = relative;
        self
    }

    #[must_use]
    pub fn with_show_location(mut self, show: bool) -> Self {
        self.show_location = Some(show);
        self
    }

    #[must_use]
    pub fn with_syslog_ident(mut self, ident: impl Into<String>) -> Self {
        self.syslog_ident = Some(ident.into());
        self
    }

    /// The level name, or `None` when unset or empty
    pub fn level_name(&self) -> Option<&str> {
        self.level.as_deref().filter(|name| !name.is_empty())
    }

    /// The log file path, or `None` when unset or empty
    pub fn file_path(&self) -> Option<&std::path::Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }

    pub fn timestamp_mode(&self) -> TimestampMode {
        TimestampMode::from_flags(self.show_timestamps, self.relative_timestamps)
    }
}
