//! Syslog transport
//!
//! Calls `openlog`/`syslog`/`closelog` through libc. The connection is a
//! process-wide libc resource: the most recently opened transport owns it, and
//! closing an older transport leaves the current owner's connection alone.

use crate::core::{LogRecord, LoggerError, Result, Transport};
use parking_lot::Mutex;
use std::ffi::CString;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ident used when the program name cannot be determined
pub const FALLBACK_SYSLOG_IDENT: &str = "lm_log";

/// Mirror to the console on failure, include the PID, echo to stderr
pub const SYSLOG_OPTIONS: libc::c_int = libc::LOG_CONS | libc::LOG_PID | libc::LOG_PERROR;

pub const SYSLOG_FACILITY: libc::c_int = libc::LOG_DAEMON;

/// File name of the running executable
pub fn default_ident() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(std::path::Path::new)
        .and_then(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_SYSLOG_IDENT.to_string())
}

/// Generation of the transport whose ident libc currently holds, 0 for none.
/// Locked around every openlog/closelog.
static OWNER: Mutex<u64> = parking_lot::const_mutex(0);
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Cut a line at its first NUL, the way `"%s"` reads it
pub fn until_nul(message: &str) -> &str {
    message.split('\0').next().unwrap_or(message)
}

pub struct SyslogTransport {
    // syslog(3) keeps this pointer until closelog or the next openlog.
    ident: CString,
    generation: u64,
    open: bool,
}

impl SyslogTransport {
    pub fn open(ident: &str) -> Result<Self> {
        let ident = CString::new(ident)
            .map_err(|_| LoggerError::config("syslog", "ident contains a NUL byte"))?;

        let generation = NEXT_GENERATION.fetch_add(1, Ordering::Relaxed);
        let mut owner = OWNER.lock();
        // SAFETY: `ident` is a valid C string owned by the transport. libc
        // drops the pointer at the next openlog, or at the closelog this
        // transport issues while it is still the owner.
        unsafe {
            libc::openlog(ident.as_ptr(), SYSLOG_OPTIONS, SYSLOG_FACILITY);
        }
        *owner = generation;

        Ok(Self {
            ident,
            generation,
            open: true,
        })
    }

    pub fn ident(&self) -> &str {
        self.ident.to_str().unwrap_or(FALLBACK_SYSLOG_IDENT)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether libc still holds this transport's ident
    pub fn owns_connection(&self) -> bool {
        self.open && *OWNER.lock() == self.generation
    }
}

impl Transport for SyslogTransport {
    fn write(&mut self, record: &LogRecord<'_>) -> Result<()> {
        if !self.open {
            return Ok(());
        }

        let message = CString::new(until_nul(record.message))
            .map_err(|e| LoggerError::write("syslog", e.into()))?;

        // The line goes through "%s" so stray '%' are never interpreted.
        // SAFETY: both pointers are valid NUL-terminated strings and openlog
        // has been called.
        unsafe {
            libc::syslog(
                record.priority.as_raw(),
                c"%s".as_ptr(),
                message.as_ptr(),
            );
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "syslog"
    }

    fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;

        let mut owner = OWNER.lock();
        if *owner == self.generation {
            // SAFETY: openlog was called in `open` and no later transport has
            // replaced the connection.
            unsafe {
                libc::closelog();
            }
            *owner = 0;
        }
        Ok(())
    }
}

impl Drop for SyslogTransport {
    fn drop(&mut self) {
        let _ = self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, Priority};

    // Tests that open a connection take turns on the process-wide owner slot.
    static SERIAL: Mutex<()> = parking_lot::const_mutex(());

    #[test]
    fn test_default_ident_is_not_empty() {
        assert!(!default_ident().is_empty());
    }

    #[test]
    fn test_ident_with_nul_is_rejected() {
        let err = SyslogTransport::open("bad\0ident").err().expect("must fail");
        assert_eq!(err.kind(), ErrorKind::InvalidArgs);
    }

    #[test]
    fn test_until_nul() {
        assert_eq!(until_nul("fix lost\0garbage\n"), "fix lost");
        assert_eq!(until_nul("\0"), "");
        assert_eq!(until_nul("plain line\n"), "plain line\n");
    }

    #[test]
    fn test_line_with_nul_is_written_truncated() {
        let _serial = SERIAL.lock();
        let mut transport = SyslogTransport::open("lm-log-unit").expect("open");
        let record = LogRecord::new(Priority::Info, "<info>  kept\0dropped\n");
        assert!(transport.write(&record).is_ok());
        transport.close().expect("close");
    }

    #[test]
    fn test_older_transport_does_not_close_newer_connection() {
        let _serial = SERIAL.lock();
        let mut first = SyslogTransport::open("lm-log-first").expect("open first");
        let mut second = SyslogTransport::open("lm-log-second").expect("open second");
        assert!(!first.owns_connection());
        assert!(second.owns_connection());

        first.close().expect("close first");
        drop(first);
        assert!(second.owns_connection());
        assert_eq!(second.ident(), "lm-log-second");

        second.close().expect("close second");
        assert!(!second.owns_connection());
        assert!(!second.is_open());
    }

    #[test]
    fn test_options() {
        assert_ne!(SYSLOG_OPTIONS & libc::LOG_PID, 0);
        assert_ne!(SYSLOG_OPTIONS & libc::LOG_PERROR, 0);
        assert_eq!(SYSLOG_FACILITY, libc::LOG_DAEMON);
    }
}
