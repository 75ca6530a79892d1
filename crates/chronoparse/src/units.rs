//! The fixed table of recognized time units.
//!
//! Months and years are flat approximations (30 and 365 days). Table order is
//! significant: single-letter abbreviations resolve to the *first* unit whose
//! name starts with that letter, so `m` is minute and `d` is day.

use serde::Serialize;

/// A recognized time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
    Decade,
}

impl Unit {
    /// Every unit, in lookup order.
    pub const ALL: [Unit; 8] = [
        Unit::Second,
        Unit::Minute,
        Unit::Hour,
        Unit::Day,
        Unit::Week,
        Unit::Month,
        Unit::Year,
        Unit::Decade,
    ];

    /// The canonical singular name (e.g., `"week"`).
    pub fn name(self) -> &'static str {
        match self {
            Unit::Second => "second",
            Unit::Minute => "minute",
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
            Unit::Decade => "decade",
        }
    }

    /// Seconds in one of this unit.
    pub fn seconds(self) -> u64 {
        match self {
            Unit::Second => 1,
            Unit::Minute => 60,
            Unit::Hour => 60 * 60,
            Unit::Day => 60 * 60 * 24,
            Unit::Week => 60 * 60 * 24 * 7,
            Unit::Month => 60 * 60 * 24 * 30,
            Unit::Year => 60 * 60 * 24 * 365,
            Unit::Decade => 60 * 60 * 24 * 365 * 10,
        }
    }

    /// Resolve unit text case-insensitively.
    ///
    /// Lookup order: full name, then first letter (only for one-character
    /// input), then plural (`name + "s"`).
    ///
    /// # Examples
    ///
    /// ```
    /// use chronoparse::Unit;
    ///
    /// assert_eq!(Unit::resolve("Hours"), Some(Unit::Hour));
    /// assert_eq!(Unit::resolve("m"), Some(Unit::Minute));
    /// assert_eq!(Unit::resolve("fortnight"), None);
    /// ```
    pub fn resolve(text: &str) -> Option<Unit> {
        let lower = text.to_ascii_lowercase();

        if let Some(unit) = Self::ALL.iter().find(|u| u.name() == lower) {
            return Some(*unit);
        }

        if lower.len() == 1 {
            if let Some(unit) = Self::ALL.iter().find(|u| u.name().starts_with(&lower)) {
                return Some(*unit);
            }
        }

        Self::ALL
            .iter()
            .find(|u| lower.strip_suffix('s') == Some(u.name()))
            .copied()
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
