//! Severity and level mask definitions

use super::error::{LoggerError, Result};
use super::priority::Priority;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

bitflags::bitflags! {
    /// Set of severities currently eligible to be emitted
    pub struct LevelMask: u32 {
        const ERR = 0x0000_0001;
        const WARN = 0x0000_0002;
        const INFO = 0x0000_0004;
        const DEBUG = 0x0000_0008;
    }
}

/// Level names accepted by [`LevelMask::from_name`], each enabling itself and
/// everything louder.
const LEVEL_TABLE: [(&str, LevelMask); 4] = [
    ("ERR", LevelMask::ERR),
    ("WARN", LevelMask::from_bits_truncate(0x0000_0003)),
    ("INFO", LevelMask::from_bits_truncate(0x0000_0007)),
    ("DEBUG", LevelMask::all()),
];

impl LevelMask {
    /// Look up a cumulative mask by level name, ignoring ASCII case
    pub fn from_name(name: &str) -> Option<Self> {
        LEVEL_TABLE
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, mask)| *mask)
    }

    #[inline]
    pub fn enables(&self, severity: Severity) -> bool {
        self.intersects(severity.flag())
    }
}

impl Default for LevelMask {
    fn default() -> Self {
        LevelMask::ERR | LevelMask::WARN | LevelMask::INFO
    }
}

impl FromStr for LevelMask {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        LevelMask::from_name(s).ok_or_else(|| LoggerError::unknown_level(s))
    }
}

/// Severity of a single log event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum Severity {
    Error = 0x0000_0001,
    Warn = 0x0000_0002,
    Info = 0x0000_0004,
    Debug = 0x0000_0008,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    #[inline]
    pub fn flag(self) -> LevelMask {
        LevelMask::from_bits_truncate(self as u32)
    }

    /// Bracketed tag prepended to text lines. All tags are seven columns wide.
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Debug => "<debug>",
            Severity::Warn => "<warn> ",
            Severity::Info => "<info> ",
            Severity::Error => "<error>",
        }
    }

    pub fn priority(self) -> Priority {
        match self {
            Severity::Debug => Priority::Debug,
            Severity::Warn => Priority::Warning,
            Severity::Info => Priority::Info,
            Severity::Error => Priority::Error,
        }
    }

    pub fn to_str(self) -> &'static str {
        match self {
            Severity::Error => "ERR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}
