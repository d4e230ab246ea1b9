//! Clock analysis for chess game records.
//!
//! This crate reads a PGN-style game record annotated with clock readings
//! (`{[%clk 0:02:59.9]}`) and reconstructs how long each player spent on
//! every move:
//! - [`GameText`] normalizes the raw record for scanning
//! - [`scanner`] extracts the time control and the clock annotations
//! - [`ClockReading`] and [`TimeControl`] parse those fragments
//! - [`MoveTimeDeriver`] turns a side's readings into [`MoveTimeRecord`]s
//! - [`TimeBuckets`] and [`SideTimeReport`] group moves worst time first
//! - [`report`] renders the results as text
//!
//! [`GameClock`] runs the whole pipeline in one call.
//!
//! # Example
//!
//! ```
//! use chess_clock::{GameClock, GameText, Side};
//!
//! let text = GameText::normalize(
//!     "[TimeControl \"180+2\"]\n1. e4 {[%clk 0:02:59]} 1... e5 {[%clk 0:02:58.5]}",
//! );
//! let game = GameClock::parse(&text)?;
//! assert_eq!(game.move_times(Side::White)[0].elapsed_seconds, 3.0);
//! # Ok::<(), chess_clock::ClockError>(())
//! ```

mod clock;
mod deriver;
mod error;
mod format;
mod history;
pub mod report;
pub mod scanner;
mod session;
mod side;
mod stats;
mod text;
mod time_control;

pub use clock::{ClockFormat, ClockReading};
pub use deriver::{MoveTimeDeriver, MoveTimeRecord};
pub use error::{ClockError, ClockLocation};
pub use format::format_duration;
pub use history::{ParseOptions, SideHistories};
pub use session::{GameClock, GameSummary, SideSummary};
pub use side::{ParseSideError, Side};
pub use stats::{sorted_by_worst, BucketSummary, SideTimeReport, TimeBuckets};
pub use text::GameText;
pub use time_control::TimeControl;
