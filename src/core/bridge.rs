//! Bridge from the `log` facade into the active logger
//!
//! Libraries in the process report diagnostics through `log::error!` and
//! friends. Once [`install`] has run, every such record is re-emitted through
//! the current target logger with a [`HostLevel`] derived from the record's
//! level, so the process produces a single log stream. Records carry no
//! location or function on this path.

use super::logger::Logger;
use super::priority::HostLevel;
use log::{LevelFilter, Metadata, Record};
use parking_lot::RwLock;
use std::fmt::Write;
use std::sync::{Arc, Once};

static TARGET: RwLock<Option<Arc<Logger>>> = parking_lot::const_rwlock(None);
static REGISTER: Once = Once::new();

struct HostBridge;

static BRIDGE: HostBridge = HostBridge;

impl log::Log for HostBridge {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        TARGET.read().is_some()
    }

    fn log(&self, record: &Record) {
        // Clone out so the lock is not held while writing.
        let Some(logger) = TARGET.read().clone() else {
            return;
        };

        let mut message = String::new();
        let _ = write!(message, "{}", record.args());
        logger.log_host(HostLevel::from(record.level()), record.target(), &message);
    }

    fn flush(&self) {}
}

/// Route `log` records to `logger`, replacing any previous target.
///
/// The facade itself is registered on first use. If another `log`
/// implementation already owns the facade, a warning is printed and only
/// direct calls reach `logger`.
pub fn install(logger: Arc<Logger>) {
    *TARGET.write() = Some(logger);

    REGISTER.call_once(|| match log::set_logger(&BRIDGE) {
        Ok(()) => log::set_max_level(LevelFilter::Trace),
        Err(_) => eprintln!(
            "[LOGGER WARNING] Another `log` implementation is installed; host messages will not be bridged"
        ),
    });
}

/// Stop bridging and return the previous target
pub fn uninstall() -> Option<Arc<Logger>> {
    TARGET.write().take()
}

/// Whether records are currently routed to a logger
pub fn is_installed() -> bool {
    TARGET.read().is_some()
}
