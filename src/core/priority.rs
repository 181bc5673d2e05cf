//! Transport priorities and the host framework's severity scale
//!
//! Every backend receives a [`Priority`], which shares its numeric values with
//! syslog(3). Events raised through the host logging facade carry a
//! [`HostLevel`] instead and are translated with [`HostLevel::priority`].

use std::fmt;

/// Syslog-compatible priority passed to the active backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Priority {
    Critical = libc::LOG_CRIT,
    Error = libc::LOG_ERR,
    Warning = libc::LOG_WARNING,
    Notice = libc::LOG_NOTICE,
    Info = libc::LOG_INFO,
    Debug = libc::LOG_DEBUG,
}

impl Priority {
    #[inline]
    pub fn as_raw(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_raw())
    }
}

/// Severity scale of the surrounding framework's generic logging facility
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostLevel {
    /// Fatal errors; the host aborts after reporting them
    Error,
    Critical,
    Warning,
    Message,
    Info,
    Debug,
}

impl HostLevel {
    pub fn priority(self) -> Priority {
        match self {
            HostLevel::Error => Priority::Critical,
            HostLevel::Critical => Priority::Error,
            HostLevel::Warning => Priority::Warning,
            HostLevel::Message => Priority::Notice,
            HostLevel::Debug => Priority::Debug,
            HostLevel::Info => Priority::Info,
        }
    }
}

impl From<log::Level> for HostLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => HostLevel::Critical,
            log::Level::Warn => HostLevel::Warning,
            log::Level::Info => HostLevel::Info,
            log::Level::Debug | log::Level::Trace => HostLevel::Debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_values_match_libc() {
        assert_eq!(Priority::Critical.as_raw(), libc::LOG_CRIT);
        assert_eq!(Priority::Error.as_raw(), libc::LOG_ERR);
        assert_eq!(Priority::Warning.as_raw(), libc::LOG_WARNING);
        assert_eq!(Priority::Notice.as_raw(), libc::LOG_NOTICE);
        assert_eq!(Priority::Info.as_raw(), libc::LOG_INFO);
        assert_eq!(Priority::Debug.as_raw(), libc::LOG_DEBUG);
    }

    #[test]
    fn test_host_level_mapping() {
        assert_eq!(HostLevel::Error.priority(), Priority::Critical);
        assert_eq!(HostLevel::Critical.priority(), Priority::Error);
        assert_eq!(HostLevel::Warning.priority(), Priority::Warning);
        assert_eq!(HostLevel::Message.priority(), Priority::Notice);
        assert_eq!(HostLevel::Info.priority(), Priority::Info);
        assert_eq!(HostLevel::Debug.priority(), Priority::Debug);
    }

    #[test]
    fn test_log_facade_levels() {
        assert_eq!(HostLevel::from(log::Level::Error), HostLevel::Critical);
        assert_eq!(HostLevel::from(log::Level::Warn), HostLevel::Warning);
        assert_eq!(HostLevel::from(log::Level::Info), HostLevel::Info);
        assert_eq!(HostLevel::from(log::Level::Trace), HostLevel::Debug);
    }

    #[test]
    fn test_display_is_numeric() {
        assert_eq!(Priority::Debug.to_string(), "7");
        assert_eq!(Priority::Critical.to_string(), "2");
    }
}
