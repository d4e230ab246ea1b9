//! Extraction of the time control declaration and clock annotations.
//!
//! Both are located with forward substring searches over a [`GameText`],
//! so the text must already be lowercased.

use crate::{ClockError, GameText};

/// Opens the time control tag, e.g. `[timecontrol "180+2"]`.
pub const TIME_CONTROL_START: &str = "[timecontrol ";
/// Closes the time control tag.
pub const TIME_CONTROL_END: &str = "]";
/// Opens a clock annotation, e.g. `{[%clk 0:02:59.9]}`.
pub const CLOCK_START: &str = "{[%clk ";
/// Closes a clock annotation.
pub const CLOCK_END: &str = "]}";

/// A raw clock annotation found in the game text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockToken<'a> {
    /// Byte offset of the annotation's start marker.
    pub offset: usize,
    /// Inner text, trimmed.
    pub raw: &'a str,
}

/// Returns the inner text of the time control declaration with quotes
/// stripped.
pub fn extract_time_control(text: &GameText) -> Result<String, ClockError> {
    let text = text.as_str();
    let start = text
        .find(TIME_CONTROL_START)
        .ok_or(ClockError::MissingTimeControl)?
        + TIME_CONTROL_START.len();

    let rest = &text[start..];
    let end = rest
        .find(TIME_CONTROL_END)
        .ok_or_else(|| ClockError::InvalidTimeControlFormat(rest.trim().to_string()))?;

    Ok(rest[..end].replace('"', "").trim().to_string())
}

/// Iterator over the clock annotations of a game text, in text order.
///
/// Yields an error and then stops if an annotation is never closed.
#[derive(Debug, Clone)]
pub struct ClockTokens<'a> {
    text: &'a str,
    cursor: usize,
    done: bool,
}

impl<'a> ClockTokens<'a> {
    pub fn new(text: &'a GameText) -> Self {
        Self {
            text: text.as_str(),
            cursor: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for ClockTokens<'a> {
    type Item = Result<ClockToken<'a>, ClockError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let Some(found) = self.text[self.cursor..].find(CLOCK_START) else {
            self.done = true;
            return None;
        };
        let offset = self.cursor + found;
        let inner_start = offset + CLOCK_START.len();

        let Some(len) = self.text[inner_start..].find(CLOCK_END) else {
            self.done = true;
            return Some(Err(ClockError::TruncatedClockBlock { offset }));
        };
        let inner_end = inner_start + len;

        self.cursor = inner_end + CLOCK_END.len();
        Some(Ok(ClockToken {
            offset,
            raw: self.text[inner_start..inner_end].trim(),
        }))
    }
}

/// Collects every clock annotation of the text, in order.
pub fn scan_clock_tokens(text: &GameText) -> Result<Vec<ClockToken<'_>>, ClockError> {
    ClockTokens::new(text).collect()
}
