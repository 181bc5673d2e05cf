//! systemd journal transport
//!
//! Speaks journald's native datagram protocol: each record is a series of
//! fields, written as `KEY=value\n`, or for values containing a newline as
//! `KEY\n`, a little-endian u64 length, the raw value and a closing `\n`.
//! Messages always end in a newline, so MESSAGE uses the binary form.

use crate::core::{LogRecord, LoggerError, Result, Transport};
use std::os::unix::net::UnixDatagram;
use std::path::{Path, PathBuf};

pub const JOURNAL_SOCKET: &str = "/run/systemd/journal/socket";

/// Line reported when the location token has no `:`
pub const UNKNOWN_LINE: &str = "0";

/// Split a `file:line` token at the first `:`.
///
/// Everything after the colon is the line, including any trailing text.
/// Tokens without a colon are taken whole as the file name.
pub fn split_location(location: &str) -> (&str, &str) {
    location.split_once(':').unwrap_or((location, UNKNOWN_LINE))
}

fn append_field(payload: &mut Vec<u8>, key: &str, value: &[u8]) {
    payload.extend_from_slice(key.as_bytes());
    if value.contains(&b'\n') {
        payload.push(b'\n');
        payload.extend_from_slice(&(value.len() as u64).to_le_bytes());
    } else {
        payload.push(b'=');
    }
    payload.extend_from_slice(value);
    payload.push(b'\n');
}

/// Serialize one record into a journal datagram
pub fn encode_record(record: &LogRecord<'_>) -> Vec<u8> {
    let mut payload = Vec::with_capacity(record.message.len() + 128);

    append_field(&mut payload, "MESSAGE", record.message.as_bytes());
    append_field(
        &mut payload,
        "PRIORITY",
        record.priority.as_raw().to_string().as_bytes(),
    );

    if let Some(location) = record.location {
        let (file, line) = split_location(location);
        append_field(
            &mut payload,
            "CODE_FUNC",
            record.function.unwrap_or_default().as_bytes(),
        );
        append_field(&mut payload, "CODE_FILE", file.as_bytes());
        append_field(&mut payload, "CODE_LINE", line.as_bytes());
    }

    payload
}

/// Sends each record as one datagram to the journal socket.
///
/// A record larger than the socket's datagram limit fails with `EMSGSIZE`.
/// There is no fallback to passing it through a sealed memory file.
pub struct JournalTransport {
    socket: UnixDatagram,
    path: PathBuf,
}

impl JournalTransport {
    /// Use the system journal socket
    pub fn new() -> Result<Self> {
        Self::with_socket_path(JOURNAL_SOCKET)
    }

    pub fn with_socket_path(path: impl Into<PathBuf>) -> Result<Self> {
        let socket = UnixDatagram::unbound()
            .map_err(|e| LoggerError::failed("Couldn't create journal socket", e))?;

        Ok(Self {
            socket,
            path: path.into(),
        })
    }

    pub fn socket_path(&self) -> &Path {
        &self.path
    }
}

impl Transport for JournalTransport {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()> {
        let payload = encode_record(record);
        self.socket
            .send_to(&payload, &self.path)
            .map_err(|e| LoggerError::write("journal", e))?;
        Ok(())
    }

    fn name(&self) -> &str {
        "journal"
    }
}
