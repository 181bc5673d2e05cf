//! In-memory capturing transport
//!
//! Keeps every record it receives. Clones share the same storage, so a test
//! can hand one clone to the logger and inspect the other.

use crate::core::{LogRecord, Priority, Result, Transport};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub location: Option<String>,
    pub function: Option<String>,
    pub priority: Priority,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTransport {
    records: Arc<Mutex<Vec<CapturedRecord>>>,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Transport for MemoryTransport {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()> {
        self.records.lock().push(CapturedRecord {
            location: record.location.map(str::to_owned),
            function: record.function.map(str::to_owned),
            priority: record.priority,
            message: record.message.to_owned(),
        });
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
