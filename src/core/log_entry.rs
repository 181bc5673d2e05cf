//! Record handed to the active transport

use super::priority::Priority;

/// One fully formatted line plus the metadata structured transports need
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    /// Source location token, conventionally `file:line`
    pub location: Option<&'a str>,
    pub function: Option<&'a str>,
    pub priority: Priority,
    /// Formatted line, newline terminated
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(priority: Priority, message: &'a str) -> Self {
        Self {
            location: None,
            function: None,
            priority,
            message,
        }
    }

    pub fn with_location(mut self, location: Option<&'a str>, function: Option<&'a str>) -> Self {
        self.location = location;
        self.function = function;
        self
    }
}
