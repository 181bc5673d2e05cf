//! Main logger implementation

use super::{
    bridge,
    config::LogConfig,
    error::Result,
    formatter::{FormatterConfig, LineFormatter, LINE_BUFFER_CAPACITY},
    log_entry::LogRecord,
    log_level::{LevelMask, Severity},
    metrics::LoggerMetrics,
    priority::HostLevel,
    timestamp::TimestampMode,
    transport::Transport,
};
use crate::backends::{syslog, Backend, BackendKind, FileTransport, SyslogTransport};
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;

/// Line buffer and backend, locked together so lines never interleave
struct Sink {
    buffer: String,
    backend: Option<Backend>,
}

pub struct Logger {
    levels: RwLock<LevelMask>,
    formatter: LineFormatter,
    sink: Mutex<Sink>,
    kind: BackendKind,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Build a logger from startup configuration and route the `log` facade
    /// into it.
    ///
    /// Backend choice, first match wins: the journal when requested and the
    /// `journal` feature is compiled in, then `file` when set, then syslog.
    /// On error nothing is opened and the bridge keeps its previous target.
    pub fn setup(config: &LogConfig) -> Result<Arc<Logger>> {
        let levels = match config.level_name() {
            Some(name) => name.parse::<LevelMask>()?,
            None => LevelMask::default(),
        };

        let backend = Self::select_backend(config)?;

        let mut builder = Logger::builder()
            .levels(levels)
            .timestamp_mode(config.timestamp_mode());
        if let Some(show) = config.show_location {
            builder = builder.show_location(show);
        }

        let logger = Arc::new(builder.backend(backend).build());
        bridge::install(Arc::clone(&logger));
        Ok(logger)
    }

    fn select_backend(config: &LogConfig) -> Result<Backend> {
        if let Some(journal) = Self::journal_backend(config)? {
            return Ok(journal);
        }

        if let Some(path) = config.file_path() {
            return Ok(Backend::File(FileTransport::open(path)?));
        }

        let ident = config
            .syslog_ident
            .clone()
            .filter(|ident| !ident.is_empty())
            .unwrap_or_else(syslog::default_ident);
        Ok(Backend::Syslog(SyslogTransport::open(&ident)?))
    }

    #[cfg(feature = "journal")]
    fn journal_backend(config: &LogConfig) -> Result<Option<Backend>> {
        if !config.journal {
            return Ok(None);
        }
        Ok(Some(Backend::Journal(crate::backends::JournalTransport::new()?)))
    }

    #[cfg(not(feature = "journal"))]
    fn journal_backend(_config: &LogConfig) -> Result<Option<Backend>> {
        Ok(None)
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Replace the level mask by name (ERR, WARN, INFO or DEBUG, any case).
    /// An unknown name leaves the mask untouched.
    pub fn set_level(&self, name: &str) -> Result<()> {
        let mask = name.parse::<LevelMask>()?;
        self.set_level_mask(mask);
        Ok(())
    }

    pub fn set_level_mask(&self, mask: LevelMask) {
        *self.levels.write() = mask;
    }

    pub fn level_mask(&self) -> LevelMask {
        *self.levels.read()
    }

    #[inline]
    pub fn enabled(&self, severity: Severity) -> bool {
        self.levels.read().enables(severity)
    }

    /// Format one event and hand it to the backend. Masked severities return
    /// before any formatting or I/O.
    pub fn log(
        &self,
        location: Option<&str>,
        function: Option<&str>,
        severity: Severity,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled(severity) {
            self.metrics.record_filtered();
            return;
        }

        let mut sink = self.sink.lock();
        let Sink { buffer, backend } = &mut *sink;
        let Some(backend) = backend.as_mut() else {
            return;
        };

        self.formatter
            .format_into(buffer, location, function, severity, args);
        let record = LogRecord::new(severity.priority(), buffer.as_str())
            .with_location(location, function);
        Self::dispatch(backend, &record, &self.metrics);
    }

    /// Re-emit a message raised through the host logging facility.
    ///
    /// These bypass the level mask and the formatter; only a trailing newline
    /// is added when missing.
    pub fn log_host(&self, level: HostLevel, domain: &str, message: &str) {
        let mut sink = self.sink.lock();
        let Sink { buffer, backend } = &mut *sink;
        let Some(backend) = backend.as_mut() else {
            return;
        };

        buffer.clear();
        buffer.push_str(message);
        if !buffer.ends_with('\n') {
            buffer.push('\n');
        }

        let record = LogRecord::new(level.priority(), buffer.as_str());
        if !Self::dispatch(backend, &record, &self.metrics) {
            eprintln!("[LOGGER ERROR] Dropped message from domain '{}'", domain);
        }
    }

    fn dispatch(
        backend: &mut Backend,
        record: &LogRecord<'_>,
        metrics: &LoggerMetrics,
    ) -> bool {
        match backend.write(record) {
            Ok(()) => {
                metrics.record_written();
                true
            }
            Err(e) => {
                // Report the first failure and every thousandth after it.
                let failed = metrics.record_failed();
                if failed % 1000 == 0 {
                    eprintln!(
                        "[LOGGER ERROR] {} backend failed ({} failures so far): {}",
                        backend.name(),
                        failed + 1,
                        e
                    );
                }
                false
            }
        }
    }

    #[inline]
    pub fn error(&self, message: &str) {
        self.log(None, None, Severity::Error, format_args!("{}", message));
    }

    #[inline]
    pub fn warn(&self, message: &str) {
        self.log(None, None, Severity::Warn, format_args!("{}", message));
    }

    #[inline]
    pub fn info(&self, message: &str) {
        self.log(None, None, Severity::Info, format_args!("{}", message));
    }

    #[inline]
    pub fn debug(&self, message: &str) {
        self.log(None, None, Severity::Debug, format_args!("{}", message));
    }

    pub fn backend_kind(&self) -> BackendKind {
        self.kind
    }

    pub fn formatter_config(&self) -> &FormatterConfig {
        self.formatter.config()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Whether [`shutdown`](Self::shutdown) has released the backend
    pub fn is_shut_down(&self) -> bool {
        self.sink.lock().backend.is_none()
    }

    /// Release the backend resource. Later calls and later log events are
    /// no-ops.
    pub fn shutdown(&self) {
        let backend = self.sink.lock().backend.take();
        if let Some(mut backend) = backend {
            if let Err(e) = backend.close() {
                eprintln!("[LOGGER ERROR] Failed to close {} backend: {}", backend.name(), e);
            }
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        self.shutdown();

        let failed = self.metrics.failed_count();
        if failed > 0 {
            eprintln!(
                "[LOGGER WARNING] Logger shutting down with {} failed writes (failure rate: {:.2}%)",
                failed,
                self.metrics.failure_rate()
            );
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("levels", &self.level_mask())
            .field("backend", &self.kind)
            .field("formatter", self.formatter.config())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use lm_log::prelude::*;
///
/// let capture = MemoryTransport::new();
/// let logger = Logger::builder()
///     .level("debug")
///     .expect("known level")
///     .timestamp_mode(TimestampMode::Relative)
///     .backend(Backend::custom(capture.clone()))
///     .build();
///
/// logger.debug("probing");
/// assert_eq!(capture.len(), 1);
/// ```
pub struct LoggerBuilder {
    levels: LevelMask,
    timestamp_mode: TimestampMode,
    show_tag: Option<bool>,
    show_location: Option<bool>,
    backend: Option<Backend>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            levels: LevelMask::default(),
            timestamp_mode: TimestampMode::None,
            show_tag: None,
            show_location: None,
            backend: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn levels(mut self, levels: LevelMask) -> Self {
        self.levels = levels;
        self
    }

    /// Set the mask by level name
    pub fn level(mut self, name: &str) -> Result<Self> {
        self.levels = name.parse()?;
        Ok(self)
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_mode(mut self, mode: TimestampMode) -> Self {
        self.timestamp_mode = mode;
        self
    }

    /// Override the severity tag; by default it is shown for every backend
    /// except the journal
    #[must_use = "builder methods return a new value"]
    pub fn show_tag(mut self, show: bool) -> Self {
        self.show_tag = Some(show);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn show_location(mut self, show: bool) -> Self {
        self.show_location = Some(show);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the Logger. Without a backend every event is dropped.
    pub fn build(self) -> Logger {
        let defaults = FormatterConfig::default();
        let show_tag = self.show_tag.unwrap_or_else(|| {
            self.backend
                .as_ref()
                .map_or(defaults.show_tag, Backend::wants_severity_tag)
        });
        let config = FormatterConfig {
            show_tag,
            timestamp_mode: self.timestamp_mode,
            show_location: self.show_location.unwrap_or(defaults.show_location),
        };

        let kind = self
            .backend
            .as_ref()
            .map_or(BackendKind::Custom, Backend::kind);

        Logger {
            levels: RwLock::new(self.levels),
            formatter: LineFormatter::new(config),
            sink: Mutex::new(Sink {
                buffer: String::with_capacity(LINE_BUFFER_CAPACITY),
                backend: self.backend,
            }),
            kind,
            metrics: LoggerMetrics::new(),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
