//! Logging macros for ergonomic log message formatting.
//!
//! Each macro records the call site as a `file:line` token and the path of
//! the enclosing function, then formats its arguments like `format!`.
//!
//! # Examples
//!
//! ```
//! use lm_log::prelude::*;
//! use lm_log::{debug, info};
//!
//! let capture = MemoryTransport::new();
//! let logger = Logger::builder()
//!     .levels(LevelMask::all())
//!     .backend(Backend::custom(capture.clone()))
//!     .build();
//!
//! info!(logger, "Fix acquired");
//! debug!(logger, "Accuracy {} m", 12);
//! assert_eq!(capture.len(), 2);
//! ```

/// Path of the enclosing function, e.g. `my_daemon::gps::start`.
#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = &name[..name.len() - 3];
        name.strip_suffix("::{{closure}}").unwrap_or(name)
    }};
}

/// Log a message at the given severity.
///
/// # Examples
///
/// ```
/// # use lm_log::prelude::*;
/// # let logger = Logger::builder().backend(Backend::custom(MemoryTransport::new())).build();
/// use lm_log::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log(
            ::core::option::Option::Some(::core::concat!(::core::file!(), ":", ::core::line!())),
            ::core::option::Option::Some($crate::__function_name!()),
            $severity,
            ::core::format_args!($($arg)+),
        )
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warn, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a debug-level message. Disabled unless the mask includes DEBUG.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::backends::{Backend, MemoryTransport};
    use crate::core::{LevelMask, Logger, Priority, Severity};

    fn capture_logger() -> (Logger, MemoryTransport) {
        let capture = MemoryTransport::new();
        let logger = Logger::builder()
            .levels(LevelMask::all())
            .show_tag(false)
            .show_location(false)
            .backend(Backend::custom(capture.clone()))
            .build();
        (logger, capture)
    }

    #[test]
    fn test_log_macro_records_call_site() {
        let (logger, capture) = capture_logger();
        let line = line!() + 1;
        log!(logger, Severity::Warn, "Formatted: {}", 42);

        let record = &capture.records()[0];
        assert_eq!(record.message, "Formatted: 42\n");
        assert_eq!(record.priority, Priority::Warning);
        assert_eq!(
            record.location.as_deref(),
            Some(format!("{}:{}", file!(), line).as_str())
        );
    }

    #[test]
    fn test_function_name() {
        let (logger, capture) = capture_logger();
        info!(logger, "x");

        let function = capture.records()[0].function.clone().expect("function");
        assert!(
            function.ends_with("macros::tests::test_function_name"),
            "got {}",
            function
        );
    }

    #[test]
    fn test_function_name_inside_closure() {
        let name = (|| crate::__function_name!())();
        assert!(name.ends_with("test_function_name_inside_closure"), "got {}", name);
    }

    #[test]
    fn test_severity_macros() {
        let (logger, capture) = capture_logger();
        error!(logger, "e");
        warn!(logger, "w {}", 1);
        info!(logger, "i");
        debug!(logger, "d");

        let priorities: Vec<Priority> = capture.records().iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![
                Priority::Error,
                Priority::Warning,
                Priority::Info,
                Priority::Debug
            ]
        );
    }

    #[test]
    fn test_macro_through_arc() {
        let (logger, capture) = capture_logger();
        let logger = std::sync::Arc::new(logger);
        info!(logger, "shared");
        assert_eq!(capture.len(), 1);
    }
}
