//! Human-readable text reports.
//!
//! Every writer takes already-derived data and renders it line by line; no
//! derivation happens here.

use std::io::{self, Write};

use crate::stats::sorted_by_worst;
use crate::{format_duration, ClockReading, MoveTimeRecord, Side, SideTimeReport, TimeControl};

/// Writes `Time Control: <start> + <increment>`.
pub fn write_time_control<W: Write>(out: &mut W, time_control: &TimeControl) -> io::Result<()> {
    writeln!(
        out,
        "Time Control: {} + {}",
        format_duration(f64::from(time_control.start_seconds)),
        format_duration(f64::from(time_control.increment_seconds))
    )
}

/// Writes a side's moves grouped by time spent, worst first, followed by
/// the approximate total.
pub fn write_moves_by_time<W: Write>(out: &mut W, report: &SideTimeReport) -> io::Result<()> {
    writeln!(
        out,
        "{} {} moves sorted by worst time (approximate {} received)",
        report.move_count,
        report.side.as_str(),
        format_duration(report.approximate_allotment_seconds as f64)
    )?;

    for bucket in &report.buckets {
        let percent = match bucket.percent_of_allotment {
            Some(percent) => format!("{:.2}%", percent),
            None => "n/a".to_string(),
        };
        writeln!(
            out,
            "{} move(s) spent {} (about {}) each (move(s): {:?})",
            bucket.move_count,
            format_duration(bucket.seconds as f64),
            percent,
            bucket.moves
        )?;
    }

    writeln!(
        out,
        "approximate {} spent",
        format_duration(report.approximate_spent_seconds as f64)
    )
}

/// Writes the clock visor shown after each of a side's moves.
pub fn write_clock_history<W: Write>(
    out: &mut W,
    side: Side,
    readings: &[ClockReading],
) -> io::Result<()> {
    writeln!(
        out,
        "{} records for {} historical clock's visor",
        readings.len(),
        side.as_str()
    )?;
    for (i, reading) in readings.iter().enumerate() {
        writeln!(out, "[move {}] {}", i + 1, reading)?;
    }
    Ok(())
}

/// Writes the time spent on each of a side's moves, in move order or
/// worst first.
pub fn write_time_per_move<W: Write>(
    out: &mut W,
    side: Side,
    records: &[MoveTimeRecord],
    sort_by_worst: bool,
) -> io::Result<()> {
    let (records, suffix) = if sort_by_worst {
        (sorted_by_worst(records), " sorted by worst time")
    } else {
        (records.to_vec(), "")
    };

    writeln!(
        out,
        "{} records for {} historical time per move{}",
        records.len(),
        side.as_str(),
        suffix
    )?;
    for record in &records {
        writeln!(
            out,
            "[move {}] {}",
            record.move_index,
            format_duration(record.elapsed_seconds)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(write: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut out = Vec::new();
        write(&mut out).expect("writing to a Vec never fails");
        String::from_utf8(out).expect("reports are UTF-8")
    }

    fn records(elapsed: &[f64]) -> Vec<MoveTimeRecord> {
        elapsed
            .iter()
            .enumerate()
            .map(|(i, &elapsed_seconds)| MoveTimeRecord {
                move_index: i + 1,
                elapsed_seconds,
            })
            .collect()
    }

    #[test]
    fn time_control_line() {
        let text = render(|out| write_time_control(out, &TimeControl::new(180, 2)));
        assert_eq!(text, "Time Control: 3min + 2sec\n");
    }

    #[test]
    fn moves_by_time_lines() {
        let tc = TimeControl::new(180, 2);
        let report = SideTimeReport::build(Side::White, &records(&[3.0, 11.0, 3.0]), &tc);
        let text = render(|out| write_moves_by_time(out, &report));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "3 white moves sorted by worst time (approximate 3min6sec received)",
                "1 move(s) spent 11sec (about 5.91%) each (move(s): [2])",
                "2 move(s) spent 3sec (about 1.61%) each (move(s): [1, 3])",
                "approximate 17sec spent",
            ]
        );
    }

    #[test]
    fn moves_by_time_without_allotment() {
        let report = SideTimeReport::build(Side::Black, &records(&[0.0]), &TimeControl::new(0, 0));
        let text = render(|out| write_moves_by_time(out, &report));
        assert!(text.contains("(about n/a)"));
        assert!(text.contains("approximate 0sec received"));
    }

    #[test]
    fn clock_history_lines() {
        let readings = vec![
            ClockReading::parse("0:02:59.9").unwrap(),
            ClockReading::parse("0:02:41").unwrap(),
        ];
        let text = render(|out| write_clock_history(out, Side::Black, &readings));
        assert_eq!(
            text,
            "2 records for black historical clock's visor\n\
             [move 1] 00:02:59.900\n\
             [move 2] 00:02:41\n"
        );
    }

    #[test]
    fn time_per_move_in_move_order() {
        let text = render(|out| write_time_per_move(out, Side::White, &records(&[3.0, 75.5]), false));
        assert_eq!(
            text,
            "2 records for white historical time per move\n\
             [move 1] 3sec\n\
             [move 2] 1min16sec\n"
        );
    }

    #[test]
    fn time_per_move_sorted_by_worst() {
        let text = render(|out| write_time_per_move(out, Side::White, &records(&[3.0, 75.5, 9.0]), true));
        assert_eq!(
            text,
            "3 records for white historical time per move sorted by worst time\n\
             [move 2] 1min16sec\n\
             [move 3] 9sec\n\
             [move 1] 3sec\n"
        );
    }
}
