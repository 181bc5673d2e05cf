//! Line composition
//!
//! Every line follows the fixed template
//! `<tag> [timestamp] [location] function(): message\n`, where each segment
//! before the message can be switched off independently.

use super::log_level::Severity;
use super::timestamp::{Clock, TimestampMode};
use std::fmt::{self, Write};

/// Initial capacity of a logger's line buffer
pub const LINE_BUFFER_CAPACITY: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatterConfig {
    /// Prefix the severity tag, e.g. `<info> `
    pub show_tag: bool,
    pub timestamp_mode: TimestampMode,
    /// Prefix `[location] function(): `
    pub show_location: bool,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            show_tag: true,
            timestamp_mode: TimestampMode::None,
            show_location: cfg!(feature = "func-loc"),
        }
    }
}

impl FormatterConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_show_tag(mut self, show: bool) -> Self {
        self.show_tag = show;
        self
    }

    #[must_use]
    pub fn with_timestamp_mode(mut self, mode: TimestampMode) -> Self {
        self.timestamp_mode = mode;
        self
    }

    #[must_use]
    pub fn with_show_location(mut self, show: bool) -> Self {
        self.show_location = show;
        self
    }
}

#[derive(Debug, Clone)]
pub struct LineFormatter {
    config: FormatterConfig,
    clock: Clock,
}

impl LineFormatter {
    /// Starts the relative clock.
    pub fn new(config: FormatterConfig) -> Self {
        Self {
            config,
            clock: Clock::start(config.timestamp_mode),
        }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Clear `buffer` and compose one line into it
    pub fn format_into(
        &self,
        buffer: &mut String,
        location: Option<&str>,
        function: Option<&str>,
        severity: Severity,
        args: fmt::Arguments<'_>,
    ) {
        buffer.clear();

        if self.config.show_tag {
            buffer.push_str(severity.tag());
            buffer.push(' ');
        }

        self.clock.write_prefix(buffer);

        if self.config.show_location {
            if let Some(location) = location {
                let _ = write!(buffer, "[{}] {}(): ", location, function.unwrap_or_default());
            }
        }

        let _ = buffer.write_fmt(args);
        buffer.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compose(config: FormatterConfig, severity: Severity, args: fmt::Arguments<'_>) -> String {
        let formatter = LineFormatter::new(config);
        let mut buffer = String::new();
        formatter.format_into(&mut buffer, Some("main.rs:7"), Some("daemon::run"), severity, args);
        buffer
    }

    #[test]
    fn test_full_template() {
        let config = FormatterConfig::new()
            .with_show_tag(true)
            .with_show_location(true);
        let line = compose(config, Severity::Warn, format_args!("low fix count {}", 3));
        assert_eq!(line, "<warn>  [main.rs:7] daemon::run(): low fix count 3\n");
    }

    #[test]
    fn test_bare_message() {
        let config = FormatterConfig::new()
            .with_show_tag(false)
            .with_show_location(false);
        let line = compose(config, Severity::Error, format_args!("boom"));
        assert_eq!(line, "boom\n");
    }

    #[test]
    fn test_debug_tag() {
        let config = FormatterConfig::new().with_show_location(false);
        let line = compose(config, Severity::Debug, format_args!("x"));
        assert_eq!(line, "<debug> x\n");
    }

    #[test]
    fn test_relative_timestamp_follows_tag() {
        let config = FormatterConfig::new()
            .with_show_location(false)
            .with_timestamp_mode(TimestampMode::Relative);
        let line = compose(config, Severity::Info, format_args!("ready"));
        assert!(line.starts_with("<info>  [000000."), "got {:?}", line);
        assert!(line.ends_with("] ready\n"));
    }

    #[test]
    fn test_buffer_is_reused() {
        let formatter = LineFormatter::new(FormatterConfig::new().with_show_location(false));
        let mut buffer = String::with_capacity(LINE_BUFFER_CAPACITY);
        formatter.format_into(&mut buffer, None, None, Severity::Info, format_args!("first"));
        formatter.format_into(&mut buffer, None, None, Severity::Info, format_args!("second"));
        assert_eq!(buffer, "<info>  second\n");
        assert!(buffer.capacity() >= LINE_BUFFER_CAPACITY);
    }

    #[test]
    fn test_location_skipped_when_absent() {
        let formatter = LineFormatter::new(FormatterConfig::new().with_show_tag(false).with_show_location(true));
        let mut buffer = String::new();
        formatter.format_into(&mut buffer, None, None, Severity::Info, format_args!("bridged"));
        assert_eq!(buffer, "bridged\n");
    }
}
