//! Join-tree progress tracking across decomposition attempts.

use crate::record::Record;

/// Tracks width and elapsed time of every decomposition reported in a run.
///
/// A counter may ask the planner for progressively better join trees, so a
/// single run can report several widths and times. Widths and times arrive as
/// separate events and are paired by index.
#[derive(Debug, Clone, Default)]
pub struct TreeTracker {
    widths: Vec<i64>,
    times: Vec<f64>,
}

impl TreeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a join-tree width and return its `width<N>` record.
    pub fn record_width(&mut self, width: i64) -> Record {
        self.widths.push(width);
        Record::int(format!("width{}", self.widths.len()), width)
    }

    /// Record a decomposition time and return its `treetime<N>` record.
    pub fn record_time(&mut self, seconds: f64) -> Record {
        self.times.push(seconds);
        Record::float(format!("treetime{}", self.times.len()), seconds)
    }

    pub fn widths(&self) -> &[i64] {
        &self.widths
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Time of the most recent decomposition, if any was reported.
    pub fn last_time(&self) -> Option<f64> {
        self.times.last().copied()
    }

    /// Summary records: decomposition count, final width, final time.
    ///
    /// Empty when no width was ever recorded.
    pub fn flush(&self) -> Vec<Record> {
        let Some(&width) = self.widths.last() else {
            return Vec::new();
        };

        let mut records = vec![
            Record::int("treecount", self.times.len() as i64),
            Record::int("width", width),
        ];
        if let Some(time) = self.last_time() {
            records.push(Record::float("treetime", time));
        }
        records
    }
}
