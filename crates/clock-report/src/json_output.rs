//! JSON export of a game's derived clock data.

use chess_clock::{GameClock, GameSummary};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// JSON representation of an analysed game.
#[derive(Serialize)]
struct GameJson<'a> {
    /// Path of the PGN file the data was derived from.
    source: String,
    /// Time control, per-side clock histories, move times and reports.
    #[serde(flatten)]
    summary: &'a GameSummary,
}

/// Writes the game's summary as pretty-printed JSON.
///
/// The output has the following structure:
/// ```json
/// {
///   "source": "game.pgn",
///   "time_control": { "start_seconds": 180, "increment_seconds": 2 },
///   "first_mover": "white",
///   "white": {
///     "clock_history": ["00:02:59.900", "..."],
///     "move_times": [{ "move_index": 1, "elapsed_seconds": 2.1 }],
///     "report": { "side": "white", "move_count": 1, "...": "..." }
///   },
///   "black": { "...": "..." }
/// }
/// ```
pub fn write_json<W: Write>(out: W, source: &Path, game: &GameClock) -> serde_json::Result<()> {
    let summary = game.summary();
    let json = GameJson {
        source: source.display().to_string(),
        summary: &summary,
    };
    serde_json::to_writer_pretty(out, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_clock::GameText;

    #[test]
    fn test_write_json_structure() {
        let text = GameText::normalize(
            "[TimeControl \"180+2\"]\n1. e4 {[%clk 0:02:59.5]} 1... e5 {[%clk 0:02:58]}",
        );
        let game = GameClock::parse(&text).unwrap();

        let mut out = Vec::new();
        write_json(&mut out, Path::new("game.pgn"), &game).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["source"], "game.pgn");
        assert_eq!(value["time_control"]["start_seconds"], 180);
        assert_eq!(value["time_control"]["increment_seconds"], 2);
        assert_eq!(value["first_mover"], "white");
        assert_eq!(value["white"]["clock_history"][0], "00:02:59.500");
        assert_eq!(value["white"]["move_times"][0]["move_index"], 1);
        assert_eq!(value["white"]["move_times"][0]["elapsed_seconds"], 2.5);
        assert_eq!(value["black"]["report"]["side"], "black");
        assert_eq!(value["black"]["report"]["buckets"][0]["seconds"], 4);
        assert_eq!(value["black"]["report"]["approximate_allotment_seconds"], 182);
    }

    #[test]
    fn test_zero_allotment_percentage_is_null() {
        let text = GameText::normalize("[TimeControl \"0\"]\n1. e4 {[%clk 0:00:00]}");
        let game = GameClock::parse(&text).unwrap();

        let mut out = Vec::new();
        write_json(&mut out, Path::new("zero.pgn"), &game).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert!(value["white"]["report"]["buckets"][0]["percent_of_allotment"].is_null());
    }
}
