//! Errors raised while extracting clock data from a game record.

use crate::Side;
use thiserror::Error;

/// Where in the game a clock token sits: the side that owns it and the
/// side-relative move number (starting at 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockLocation {
    pub side: Side,
    pub move_index: usize,
}

impl std::fmt::Display for ClockLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} move {}", self.side.as_str(), self.move_index)
    }
}

/// Errors that can occur when deriving clock data from a game record.
///
/// Every variant is fatal for the record: there is no partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    #[error("missing time control: no `[timecontrol \"...\"]` declaration found")]
    MissingTimeControl,

    #[error("invalid time control \"{0}\": expected <start> or <start>+<increment> in whole seconds")]
    InvalidTimeControlFormat(String),

    #[error("truncated clock block at byte {offset}: `{{[%clk` has no closing `]}}`")]
    TruncatedClockBlock { offset: usize },

    #[error(
        "unrecognized clock format \"{raw}\"{}: expected H:MM:SS or H:MM:SS.ffffff",
        describe_location(.location)
    )]
    UnrecognizedClockFormat {
        raw: String,
        location: Option<ClockLocation>,
    },
}

impl ClockError {
    /// Attaches the side and move number to a clock format error.
    ///
    /// Other variants are returned unchanged.
    pub fn at(self, location: ClockLocation) -> Self {
        match self {
            ClockError::UnrecognizedClockFormat { raw, .. } => ClockError::UnrecognizedClockFormat {
                raw,
                location: Some(location),
            },
            other => other,
        }
    }
}

fn describe_location(location: &Option<ClockLocation>) -> String {
    match location {
        Some(location) => format!(" at {}", location),
        None => String::new(),
    }
}
