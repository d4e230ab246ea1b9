//! Time control parsing, e.g. `180+2` or `600`.

use serde::Serialize;
use std::str::FromStr;

use crate::ClockError;

/// Base allotment and per-move increment granted to each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeControl {
    /// Seconds on the clock at the start of the game.
    pub start_seconds: u32,
    /// Seconds added to the clock on every move.
    pub increment_seconds: u32,
}

impl TimeControl {
    pub const fn new(start_seconds: u32, increment_seconds: u32) -> Self {
        Self {
            start_seconds,
            increment_seconds,
        }
    }

    /// Parses `<start>` or `<start>+<increment>`.
    pub fn parse(desc: &str) -> Result<Self, ClockError> {
        let desc = desc.trim();
        let invalid = || ClockError::InvalidTimeControlFormat(desc.to_string());

        let (start, increment) = match desc.split_once('+') {
            Some((start, increment)) => (start, Some(increment)),
            None => (desc, None),
        };

        let start_seconds = parse_seconds(start).ok_or_else(invalid)?;
        let increment_seconds = match increment {
            Some(increment) => parse_seconds(increment).ok_or_else(invalid)?,
            None => 0,
        };

        Ok(Self::new(start_seconds, increment_seconds))
    }

    /// Approximate total time a player received over `move_count` moves.
    pub fn approximate_allotment(&self, move_count: usize) -> u64 {
        u64::from(self.start_seconds) + move_count as u64 * u64::from(self.increment_seconds)
    }
}

// `u32::from_str` tolerates a leading `+`, which would let "180++2" through.
fn parse_seconds(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for TimeControl {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for TimeControl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}+{}", self.start_seconds, self.increment_seconds)
    }
}
