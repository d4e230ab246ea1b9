//! Clock visor readings.

use chrono::{NaiveTime, Timelike};
use serde::Serialize;

use crate::ClockError;

/// Accepted textual layouts of a clock visor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFormat {
    /// `H:MM:SS.f`, one to nine fractional digits.
    Fractional,
    /// `H:MM:SS`.
    Whole,
}

impl ClockFormat {
    /// Formats in the order they are tried.
    pub const PRIORITY: [ClockFormat; 2] = [ClockFormat::Fractional, ClockFormat::Whole];

    /// The chrono pattern for this format.
    pub const fn pattern(self) -> &'static str {
        match self {
            ClockFormat::Fractional => "%H:%M:%S%.f",
            ClockFormat::Whole => "%H:%M:%S",
        }
    }

    /// Parses `raw` with this format only.
    pub fn parse(self, raw: &str) -> Option<NaiveTime> {
        let (whole, fraction) = match raw.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (raw, None),
        };
        // `%.f` also accepts a missing fraction; keep the formats disjoint.
        match (self, fraction) {
            (ClockFormat::Fractional, Some(digits)) if is_fraction(digits) => {}
            (ClockFormat::Whole, None) => {}
            _ => return None,
        }
        if !is_hms(whole) {
            return None;
        }
        NaiveTime::parse_from_str(raw, self.pattern())
            .ok()
            // chrono reads a seconds field of 60 as a leap second.
            .filter(|time| time.nanosecond() < 1_000_000_000)
    }
}

/// `H:MM:SS` shape: three groups of one or two ASCII digits.
fn is_hms(text: &str) -> bool {
    let groups: Vec<&str> = text.split(':').collect();
    groups.len() == 3
        && groups
            .iter()
            .all(|group| (1..=2).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit()))
}

/// One to nine ASCII digits.
fn is_fraction(text: &str) -> bool {
    (1..=9).contains(&text.len()) && text.bytes().all(|b| b.is_ascii_digit())
}

/// The remaining time shown on a player's clock after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClockReading(NaiveTime);

impl ClockReading {
    /// Parses a trimmed clock token, trying each [`ClockFormat`] in
    /// priority order.
    pub fn parse(raw: &str) -> Result<Self, ClockError> {
        ClockFormat::PRIORITY
            .iter()
            .find_map(|format| format.parse(raw))
            .map(ClockReading)
            .ok_or_else(|| ClockError::UnrecognizedClockFormat {
                raw: raw.to_string(),
                location: None,
            })
    }

    #[inline]
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    /// Remaining time in seconds, including the fraction.
    pub fn seconds_of_day(&self) -> f64 {
        f64::from(self.0.num_seconds_from_midnight()) + f64::from(self.0.nanosecond()) / 1e9
    }
}

impl std::fmt::Display for ClockReading {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
