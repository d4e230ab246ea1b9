//! Time spent per move, derived from consecutive clock readings.
//!
//! Each side's clock starts at the time control's base allotment. Before a
//! move is measured the increment is credited, then the elapsed time is the
//! credited clock minus the reading shown after the move. That reading is
//! the baseline for the next move.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use serde::Serialize;

use crate::{ClockReading, TimeControl};

/// Time spent on a single move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveTimeRecord {
    /// Side-relative move number, starting at 1.
    pub move_index: usize,
    /// Seconds spent; negative values flag an inconsistent clock sequence.
    pub elapsed_seconds: f64,
}

/// Derives [`MoveTimeRecord`]s from a side's clock history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTimeDeriver {
    anchor: NaiveDate,
    start: NaiveDateTime,
    increment: TimeDelta,
}

impl MoveTimeDeriver {
    pub fn new(time_control: &TimeControl) -> Self {
        // Readings are times of day; pin them all to one date so that only
        // durations matter.
        let anchor = NaiveDateTime::default();
        Self {
            anchor: anchor.date(),
            start: anchor + TimeDelta::seconds(i64::from(time_control.start_seconds)),
            increment: TimeDelta::seconds(i64::from(time_control.increment_seconds)),
        }
    }

    /// Computes the time spent on each move of `history`, in move order.
    pub fn derive(&self, history: &[ClockReading]) -> Vec<MoveTimeRecord> {
        let (records, _) = history.iter().enumerate().fold(
            (Vec::with_capacity(history.len()), self.start),
            |(mut records, clock), (i, reading)| {
                let credited = clock + self.increment;
                let after = self.anchor.and_time(reading.time());
                let elapsed_seconds = delta_seconds(credited - after);
                if elapsed_seconds < 0.0 {
                    tracing::warn!(
                        move_index = i + 1,
                        elapsed_seconds,
                        "clock reading {} is above the credited clock",
                        reading
                    );
                }
                records.push(MoveTimeRecord {
                    move_index: i + 1,
                    elapsed_seconds,
                });
                (records, after)
            },
        );
        records
    }
}

fn delta_seconds(delta: TimeDelta) -> f64 {
    delta.num_seconds() as f64 + f64::from(delta.subsec_nanos()) / 1e9
}
