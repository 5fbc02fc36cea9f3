//! Parser for the resource supervisor's diagnostic block.
//!
//! After the solver exits, runsolver prints `KEY=VALUE` lines describing the
//! supervised process. Only a handful of keys are reported; the rest are
//! ignored so that newer supervisor versions keep working.

use crate::record::Record;
use crate::solver::SolverKind;
use crate::tracker::TreeTracker;

/// Supervisor keys the postprocessor reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerKey {
    /// Wall-clock seconds.
    WcTime,
    /// Peak memory in kilobytes.
    MaxMm,
    Timeout,
    Memout,
    ExitStatus,
}

impl RunnerKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "WCTIME" => Some(RunnerKey::WcTime),
            // MAXMM is what the timeout decision is based on; MAXVM/MAXRSS are not.
            "MAXMM" => Some(RunnerKey::MaxMm),
            "TIMEOUT" => Some(RunnerKey::Timeout),
            "MEMOUT" => Some(RunnerKey::Memout),
            "EXITSTATUS" => Some(RunnerKey::ExitStatus),
            _ => None,
        }
    }
}

/// Parse one diagnostic line into zero or more records.
///
/// For the pure-counting role the supervisor only timed the counter, so the
/// last decomposition time is added on top of the reported wall time.
pub fn parse_runner_line(
    line: &str,
    solver: Option<SolverKind>,
    tracker: &TreeTracker,
) -> Vec<Record> {
    let Some((key, value)) = line.split_once('=') else {
        tracing::debug!(line, "skipping runner line without '='");
        return Vec::new();
    };
    let Some(key) = RunnerKey::from_key(key) else {
        return Vec::new();
    };

    match key {
        RunnerKey::WcTime => {
            let Some(mut time) = parse_float(key, value) else {
                return Vec::new();
            };
            let mut records = Vec::with_capacity(2);
            if solver.is_some_and(|s| s.is_counting_only()) {
                records.push(Record::float("exetime", time));
                if let Some(tree_time) = tracker.last_time() {
                    time += tree_time;
                }
            }
            records.push(Record::float("time", time));
            records
        }
        RunnerKey::MaxMm => parse_float(key, value)
            .map(|kb| vec![Record::float("mem", kb / 1e6)])
            .unwrap_or_default(),
        RunnerKey::Timeout => vec![Record::flag("timeout", value == "true")],
        RunnerKey::Memout => vec![Record::flag("memout", value == "true")],
        RunnerKey::ExitStatus => vec![Record::new("exit", value)],
    }
}

fn parse_float(key: RunnerKey, value: &str) -> Option<f64> {
    match value.trim().parse::<f64>() {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!(?key, value, error = %e, "skipping non-numeric runner value");
            None
        }
    }
}
