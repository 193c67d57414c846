//! Wall-clock source in Brasília time.
//!
//! America/Sao_Paulo has had no daylight saving since 2019, so the zone is a
//! fixed UTC-03:00 offset for every session this tool can run.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};

const BRASILIA_OFFSET_SECS: i32 = 3 * 3600;

/// Fixed UTC-03:00 offset used for every timestamp the cockpit shows.
pub fn brasilia_offset() -> FixedOffset {
    FixedOffset::west_opt(BRASILIA_OFFSET_SECS).expect("UTC-3 is a valid offset")
}

/// Source of "now" for the deadline calculator.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<FixedOffset> {
        (**self).now()
    }
}

/// Reads the system clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&brasilia_offset())
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl FixedClock {
    /// Instant at `hour:minute:second` Brasília time on the given date.
    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Option<Self> {
        brasilia_offset()
            .with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
