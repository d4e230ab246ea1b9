//! A parsed game record with every derived clock statistic.

use serde::Serialize;

use crate::scanner::{extract_time_control, scan_clock_tokens};
use crate::{
    ClockError, ClockLocation, ClockReading, GameText, MoveTimeDeriver, MoveTimeRecord,
    ParseOptions, Side, SideHistories, SideTimeReport, TimeBuckets, TimeControl,
};

/// Clock data of one game record.
///
/// Everything is derived once in [`GameClock::parse_with`] and is read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct GameClock {
    time_control: TimeControl,
    first_mover: Side,
    histories: SideHistories,
    move_times: [Vec<MoveTimeRecord>; 2],
}

impl GameClock {
    /// Parses a game record, White moving first.
    pub fn parse(text: &GameText) -> Result<Self, ClockError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parses a game record.
    ///
    /// # Errors
    ///
    /// Fails on the first missing or malformed time control, truncated
    /// clock block or unrecognized clock reading. No partial result is
    /// produced.
    pub fn parse_with(text: &GameText, options: &ParseOptions) -> Result<Self, ClockError> {
        let time_control = TimeControl::parse(&extract_time_control(text)?)?;
        tracing::debug!(%time_control, "time control resolved");

        let readings = scan_clock_tokens(text)?
            .into_iter()
            .enumerate()
            .map(|(ply, token)| {
                ClockReading::parse(token.raw).map_err(|err| err.at(locate(ply, options.first_mover)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let histories = SideHistories::split(readings, options.first_mover);
        tracing::debug!(
            white = histories.move_count(Side::White),
            black = histories.move_count(Side::Black),
            "clock readings extracted"
        );

        let deriver = MoveTimeDeriver::new(&time_control);
        let move_times = Side::ALL.map(|side| deriver.derive(histories.get(side)));

        Ok(Self {
            time_control,
            first_mover: options.first_mover,
            histories,
            move_times,
        })
    }

    pub fn time_control(&self) -> &TimeControl {
        &self.time_control
    }

    pub fn first_mover(&self) -> Side {
        self.first_mover
    }

    /// Clock visor after each of `side`'s moves.
    pub fn clock_history(&self, side: Side) -> &[ClockReading] {
        self.histories.get(side)
    }

    /// Time spent on each of `side`'s moves.
    pub fn move_times(&self, side: Side) -> &[MoveTimeRecord] {
        &self.move_times[side.index()]
    }

    pub fn move_count(&self, side: Side) -> usize {
        self.histories.move_count(side)
    }

    pub fn buckets(&self, side: Side) -> TimeBuckets {
        TimeBuckets::from_records(self.move_times(side))
    }

    pub fn side_report(&self, side: Side) -> SideTimeReport {
        SideTimeReport::build(side, self.move_times(side), &self.time_control)
    }

    /// Snapshot of the whole game, for serialization.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            time_control: self.time_control,
            first_mover: self.first_mover,
            white: SideSummary::new(self, Side::White),
            black: SideSummary::new(self, Side::Black),
        }
    }
}

fn locate(ply: usize, first_mover: Side) -> ClockLocation {
    let side = if ply % 2 == 0 {
        first_mover
    } else {
        first_mover.opposite()
    };
    ClockLocation {
        side,
        move_index: ply / 2 + 1,
    }
}

/// Serializable view of a [`GameClock`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSummary {
    pub time_control: TimeControl,
    pub first_mover: Side,
    pub white: SideSummary,
    pub black: SideSummary,
}

/// Serializable view of one side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideSummary {
    pub clock_history: Vec<ClockReading>,
    pub move_times: Vec<MoveTimeRecord>,
    pub report: SideTimeReport,
}

impl SideSummary {
    fn new(game: &GameClock, side: Side) -> Self {
        Self {
            clock_history: game.clock_history(side).to_vec(),
            move_times: game.move_times(side).to_vec(),
            report: game.side_report(side),
        }
    }
}
