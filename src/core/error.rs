//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

/// Coarse classification of a [`LoggerError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed something unusable, e.g. an unknown level name
    InvalidArgs,
    /// A backend resource could not be acquired
    Failed,
}

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Unrecognized argument, recoverable by retrying with a valid value
    #[error("{message}")]
    InvalidArgs { message: String },

    /// Backend resource acquisition failed
    #[error("{message}")]
    Failed {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// JSON configuration could not be parsed
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Transport write error
    #[error("Transport '{transport}' write failed: {source}")]
    Write {
        transport: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoggerError {
    /// Unknown log level name
    pub fn unknown_level(name: &str) -> Self {
        LoggerError::InvalidArgs {
            message: format!("Unknown log level '{}'", name),
        }
    }

    /// Log file could not be opened. The message carries the OS error code.
    pub fn open_log_file(source: std::io::Error) -> Self {
        let code = source.raw_os_error().unwrap_or(0);
        let description = match source.raw_os_error() {
            Some(errno) => strerror(errno),
            None => source.to_string(),
        };
        LoggerError::Failed {
            message: format!("Couldn't open log file: ({}) {}", code, description),
            source,
        }
    }

    /// Backend failure with a custom message
    pub fn failed(message: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Failed {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a transport write error
    pub fn write(transport: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::Write {
            transport: transport.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LoggerError::InvalidArgs { .. }
            | LoggerError::InvalidConfiguration { .. }
            | LoggerError::JsonError(_) => ErrorKind::InvalidArgs,
            LoggerError::Failed { .. } | LoggerError::Write { .. } => ErrorKind::Failed,
        }
    }

    /// OS error code carried by backend failures, if any
    pub fn os_error(&self) -> Option<i32> {
        match self {
            LoggerError::Failed { source, .. } | LoggerError::Write { source, .. } => {
                source.raw_os_error()
            }
            _ => None,
        }
    }
}

/// strerror(3) without the trailing "(os error N)" that io::Error appends
fn strerror(errno: i32) -> String {
    let rendered = std::io::Error::from_raw_os_error(errno).to_string();
    match rendered.rfind(" (os error ") {
        Some(idx) => rendered[..idx].to_string(),
        None => rendered,
    }
}
