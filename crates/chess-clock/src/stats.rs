//! Grouping of moves by time spent, worst first.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::{MoveTimeRecord, Side, TimeControl};

/// Moves grouped by elapsed time rounded up to whole seconds.
///
/// Within a bucket, move indices keep the order they were recorded in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimeBuckets(BTreeMap<i64, Vec<usize>>);

impl TimeBuckets {
    pub fn from_records(records: &[MoveTimeRecord]) -> Self {
        let buckets = records.iter().fold(BTreeMap::new(), |mut buckets, record| {
            buckets
                .entry(bucket_key(record.elapsed_seconds))
                .or_insert_with(Vec::new)
                .push(record.move_index);
            buckets
        });
        TimeBuckets(buckets)
    }

    /// Moves that took `seconds` (after rounding up).
    pub fn get(&self, seconds: i64) -> Option<&[usize]> {
        self.0.get(&seconds).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Buckets ordered by time spent, longest first.
    pub fn worst_first(&self) -> impl Iterator<Item = (i64, &[usize])> + '_ {
        self.0
            .iter()
            .rev()
            .map(|(seconds, moves)| (*seconds, moves.as_slice()))
    }

    /// Total time spent, using each bucket's rounded key.
    pub fn approximate_spent_seconds(&self) -> i64 {
        self.0
            .iter()
            .map(|(seconds, moves)| seconds * moves.len() as i64)
            .sum()
    }
}

fn bucket_key(elapsed_seconds: f64) -> i64 {
    elapsed_seconds.ceil() as i64
}

/// One line of a worst-time-first report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    /// Rounded seconds spent on each move of the bucket.
    pub seconds: i64,
    pub move_count: usize,
    pub moves: Vec<usize>,
    /// Share of the approximate allotment, rounded to two decimals.
    /// Absent when the allotment is zero.
    pub percent_of_allotment: Option<f64>,
}

/// Worst-time-first summary of one side's moves.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideTimeReport {
    pub side: Side,
    pub move_count: usize,
    /// `start + move_count * increment`.
    pub approximate_allotment_seconds: u64,
    pub buckets: Vec<BucketSummary>,
    pub approximate_spent_seconds: i64,
}

impl SideTimeReport {
    pub fn build(side: Side, records: &[MoveTimeRecord], time_control: &TimeControl) -> Self {
        let move_count = records.len();
        let allotment = time_control.approximate_allotment(move_count);
        let buckets = TimeBuckets::from_records(records);

        let summaries = buckets
            .worst_first()
            .map(|(seconds, moves)| BucketSummary {
                seconds,
                move_count: moves.len(),
                moves: moves.to_vec(),
                percent_of_allotment: percent_of(seconds, allotment),
            })
            .collect();

        Self {
            side,
            move_count,
            approximate_allotment_seconds: allotment,
            buckets: summaries,
            approximate_spent_seconds: buckets.approximate_spent_seconds(),
        }
    }
}

fn percent_of(seconds: i64, allotment: u64) -> Option<f64> {
    if allotment == 0 {
        return None;
    }
    let percent = seconds as f64 / allotment as f64 * 100.0;
    Some((percent * 100.0).round() / 100.0)
}

/// Returns the records ordered by time spent, longest first. Ties keep
/// move order.
pub fn sorted_by_worst(records: &[MoveTimeRecord]) -> Vec<MoveTimeRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.elapsed_seconds.total_cmp(&a.elapsed_seconds));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn buckets_round_up() {
        let buckets = TimeBuckets::from_records(&records(&[2.1, 3.0, 2.9, 0.0]));
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets.get(3), Some(&[1, 2, 3][..]));
        assert_eq!(buckets.get(0), Some(&[4][..]));
        assert_eq!(buckets.get(2), None);
    }

    #[test]
    fn worst_first_ignores_move_order() {
        let buckets = TimeBuckets::from_records(&records(&[3.0, 5.0]));
        let keys: Vec<i64> = buckets.worst_first().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![5, 3]);
    }

    #[test]
    fn spent_time_uses_rounded_keys() {
        let buckets = TimeBuckets::from_records(&records(&[1.2, 1.2, 10.0]));
        assert_eq!(buckets.approximate_spent_seconds(), 2 * 2 + 10);
    }

    #[test]
    fn negative_elapsed_gets_its_own_bucket() {
        let buckets = TimeBuckets::from_records(&records(&[-4.5, 1.0]));
        assert_eq!(buckets.get(-4), Some(&[1][..]));
        assert_eq!(buckets.worst_first().last(), Some((-4, &[1][..])));
    }

    #[test]
    fn side_report() {
        let tc = TimeControl::new(180, 2);
        let report = SideTimeReport::build(Side::White, &records(&[3.0, 11.0, 0.4, 3.0]), &tc);
        assert_eq!(report.side, Side::White);
        assert_eq!(report.move_count, 4);
        assert_eq!(report.approximate_allotment_seconds, 188);
        assert_eq!(report.approximate_spent_seconds, 11 + 3 * 2 + 1);

        let seconds: Vec<i64> = report.buckets.iter().map(|b| b.seconds).collect();
        assert_eq!(seconds, vec![11, 3, 1]);
        assert_eq!(report.buckets[1].moves, vec![1, 4]);
        assert_eq!(report.buckets[1].move_count, 2);
        assert_eq!(report.buckets[0].percent_of_allotment, Some(5.85));
    }

    #[test]
    fn zero_allotment_has_no_percentage() {
        let tc = TimeControl::new(0, 0);
        let report = SideTimeReport::build(Side::Black, &records(&[0.0]), &tc);
        assert_eq!(report.buckets[0].percent_of_allotment, None);
    }

    #[test]
    fn empty_records() {
        let report = SideTimeReport::build(Side::Black, &[], &TimeControl::new(60, 0));
        assert!(report.buckets.is_empty());
        assert_eq!(report.approximate_spent_seconds, 0);
        assert_eq!(report.approximate_allotment_seconds, 60);
    }

    #[test]
    fn sorted_by_worst_is_stable() {
        let sorted = sorted_by_worst(&records(&[2.0, 7.5, 2.0, 9.0]));
        let indices: Vec<usize> = sorted.iter().map(|r| r.move_index).collect();
        assert_eq!(indices, vec![4, 2, 1, 3]);
    }
}
