//! Timestamp prefixes for log lines
//!
//! Wall-clock stamps are seconds and microseconds since the Unix epoch.
//! Relative stamps are measured from a start instant captured when the logger
//! is built, using the monotonic clock so successive stamps never go backwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampMode {
    #[default]
    None,
    WallClock,
    Relative,
}

impl TimestampMode {
    /// Wall clock wins when both flags are set.
    pub fn from_flags(show_wall_clock: bool, show_relative: bool) -> Self {
        if show_wall_clock {
            TimestampMode::WallClock
        } else if show_relative {
            TimestampMode::Relative
        } else {
            TimestampMode::None
        }
    }
}

/// Append `[sssssssss.uuuuuu] ` for a wall-clock instant
pub fn write_wall_clock(buffer: &mut String, now: &DateTime<Utc>) {
    let _ = write!(
        buffer,
        "[{:09}.{:06}] ",
        now.timestamp(),
        now.timestamp_subsec_micros()
    );
}

/// Append `[ssssss.uuuuuu] ` for an offset from the start instant
pub fn write_relative(buffer: &mut String, elapsed: Duration) {
    let _ = write!(
        buffer,
        "[{:06}.{:06}] ",
        elapsed.as_secs(),
        elapsed.subsec_micros()
    );
}

/// Clock state owned by a logger
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    mode: TimestampMode,
    start: Instant,
}

impl Clock {
    /// The start instant is captured regardless of mode.
    pub fn start(mode: TimestampMode) -> Self {
        Self {
            mode,
            start: Instant::now(),
        }
    }

    pub fn mode(&self) -> TimestampMode {
        self.mode
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn write_prefix(&self, buffer: &mut String) {
        match self.mode {
            TimestampMode::None => {}
            TimestampMode::WallClock => write_wall_clock(buffer, &Utc::now()),
            TimestampMode::Relative => write_relative(buffer, self.elapsed()),
        }
    }
}
