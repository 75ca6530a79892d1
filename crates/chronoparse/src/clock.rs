//! Ambient time sources.
//!
//! Parsing reads two pieces of process state: the wall clock (the default
//! start date) and the local UTC offset (the `timezone` field). Both go
//! through [`Clock`] so callers and tests can pin them.

use chrono::{DateTime, FixedOffset, Local, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::ParseError;

/// Source of "now" and of the local UTC offset.
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;

    /// The local UTC offset in effect at `at`.
    fn utc_offset(&self, at: DateTime<Utc>) -> FixedOffset;
}

/// The operating system clock and local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn utc_offset(&self, at: DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&at.naive_utc()).fix()
    }
}

/// A frozen instant with a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
}

impl FixedClock {
    /// A frozen clock reporting UTC.
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self {
            now,
            offset: Utc.fix(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn utc_offset(&self, _at: DateTime<Utc>) -> FixedOffset {
        self.offset
    }
}

/// A frozen instant whose offset comes from an IANA timezone (DST-aware).
#[derive(Debug, Clone, Copy)]
pub struct ZonedClock {
    pub now: DateTime<Utc>,
    pub tz: Tz,
}

impl ZonedClock {
    /// Build a clock from an IANA timezone name such as `"America/New_York"`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidTimezone`] if the name is not a known zone.
    pub fn new(now: DateTime<Utc>, timezone: &str) -> Result<Self, ParseError> {
        let tz = timezone
            .parse::<Tz>()
            .map_err(|_| ParseError::InvalidTimezone(format!("'{timezone}'")))?;
        Ok(Self { now, tz })
    }
}

impl Clock for ZonedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn utc_offset(&self, at: DateTime<Utc>) -> FixedOffset {
        self.tz.offset_from_utc_datetime(&at.naive_utc()).fix()
    }
}

/// Format an offset as `"UTC"` plus signed whole hours (e.g., `"UTC-5"`, `"UTC+0"`).
///
/// Fractional-hour zones truncate toward zero: +05:30 is `"UTC+5"`.
///
/// # Examples
///
/// ```
/// use chrono::FixedOffset;
/// use chronoparse::clock::format_timezone;
///
/// let ist = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
/// assert_eq!(format_timezone(ist), "UTC+5");
/// ```
pub fn format_timezone(offset: FixedOffset) -> String {
    let hours = offset.local_minus_utc() / 3600;
    let sign = if hours >= 0 { "+" } else { "-" };
    format!("UTC{sign}{}", hours.unsigned_abs())
}
