//! Per-side clock histories.

use serde::{Deserialize, Serialize};

use crate::{ClockReading, Side};

/// Options controlling how clock tokens are attributed to sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// The side owning the first clock token; tokens alternate from there.
    pub first_mover: Side,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            first_mover: Side::White,
        }
    }
}

/// Clock readings of both sides, each in that side's move order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SideHistories {
    white: Vec<ClockReading>,
    black: Vec<ClockReading>,
}

impl SideHistories {
    /// Splits a flat stream of readings, alternating sides starting with
    /// `first_mover`.
    pub fn split<I>(readings: I, first_mover: Side) -> Self
    where
        I: IntoIterator<Item = ClockReading>,
    {
        let (histories, _) = readings.into_iter().fold(
            (Self::default(), first_mover),
            |(mut histories, side), reading| {
                histories.side_mut(side).push(reading);
                (histories, side.opposite())
            },
        );
        histories
    }

    /// Readings of one side.
    pub fn get(&self, side: Side) -> &[ClockReading] {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    /// Number of moves recorded for one side.
    pub fn move_count(&self, side: Side) -> usize {
        self.get(side).len()
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<ClockReading> {
        match side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        }
    }
}
