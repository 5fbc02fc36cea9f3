//! Interpreter for the decomposition/counting family (`planner`, `dmc`, `dpmc`).

use super::{BodyInterpreter, last_word, solution};
use crate::context::RunContext;
use crate::errors::PostprocessError;
use crate::record::Record;
use crate::signaler::Signaler;
use crate::solver::DpmcRole;

/// Prefixes whose last token is reported verbatim under a short key.
const PASS_THROUGH: [(&str, &str); 5] = [
    ("c diagramVarSeconds", "dvtime"),
    ("c sliceVarSeconds", "svtime"),
    ("c sliceAssignmentsSeconds", "satime"),
    ("c sliceWidth", "swidth"),
    ("c s log10-estimate", "log10"),
];

#[derive(Debug, Clone, Copy)]
pub struct DpmcInterpreter {
    role: DpmcRole,
}

impl DpmcInterpreter {
    pub fn new(role: DpmcRole) -> Self {
        Self { role }
    }
}

impl BodyInterpreter for DpmcInterpreter {
    fn interpret(
        &self,
        line: &str,
        ctx: &mut RunContext,
        _signaler: &mut dyn Signaler,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError> {
        let Some(last) = last_word(line) else {
            return Ok(());
        };

        if line.starts_with("c joinTreeWidth") {
            match last.parse::<i64>() {
                Ok(width) => records.push(ctx.tracker.record_width(width)),
                Err(e) => tracing::debug!(line, error = %e, "skipping malformed width"),
            }
        } else if line.starts_with("c seconds") {
            // Only the planner's own `c seconds` is a decomposition time.
            if self.role == DpmcRole::Planning {
                record_tree_time(line, last, ctx, records);
            }
        } else if line.starts_with("c plannerSeconds") {
            record_tree_time(line, last, ctx, records);
        } else if line.starts_with("c s exact") {
            records.push(solution(last));
        } else if let Some((_, key)) = PASS_THROUGH
            .iter()
            .find(|(prefix, _)| line.starts_with(prefix))
        {
            records.push(Record::new(*key, last));
        }
        Ok(())
    }
}

fn record_tree_time(line: &str, last: &str, ctx: &mut RunContext, records: &mut Vec<Record>) {
    match last.parse::<f64>() {
        Ok(seconds) => records.push(ctx.tracker.record_time(seconds)),
        Err(e) => tracing::debug!(line, error = %e, "skipping malformed tree time"),
    }
}

#[cfg(test)]
mod tests {
    use crate::context::RunContext;
    use crate::dispatch::tests::run_lines;
    use crate::signaler::tests::RecordingSignaler;
    use crate::solver::SolverKind;

    fn run(kind: SolverKind, lines: &[&str]) -> (Vec<String>, RunContext) {
        let mut ctx = RunContext::new(false);
        let mut signaler = RecordingSignaler::default();
        let records = run_lines(kind, &mut ctx, &mut signaler, lines).unwrap();
        assert!(signaler.delivered.is_empty());
        (records, ctx)
    }

    #[test]
    fn test_counting_role_tracks_planner_seconds() {
        let (records, ctx) = run(
            SolverKind::DMC,
            &[
                "c joinTreeWidth 10",
                "c plannerSeconds 2.0",
                "c seconds 9.5",
                "c s exact arb int 42",
            ],
        );
        assert_eq!(records, vec!["width1:10", "treetime1:2.0", "sol:42"]);
        assert_eq!(ctx.tracker.widths(), &[10]);
        assert_eq!(ctx.tracker.times(), &[2.0]);
    }

    #[test]
    fn test_planning_role_tracks_seconds() {
        let (records, ctx) = run(
            SolverKind::PLANNER,
            &[
                "c joinTreeWidth 14",
                "c seconds 0.5",
                "c joinTreeWidth 11",
                "c seconds 1.25",
            ],
        );
        assert_eq!(
            records,
            vec!["width1:14", "treetime1:0.5", "width2:11", "treetime2:1.25"]
        );
        assert_eq!(ctx.tracker.widths().len(), ctx.tracker.times().len());
    }

    #[test]
    fn test_combined_role_ignores_seconds() {
        let (records, _) = run(SolverKind::DPMC, &["c seconds 3.0", "c plannerSeconds 1.0"]);
        assert_eq!(records, vec!["treetime1:1.0"]);
    }

    #[test]
    fn test_pass_through_metrics() {
        let (records, _) = run(
            SolverKind::DPMC,
            &[
                "c diagramVarSeconds 0.01",
                "c sliceVarSeconds 0.02",
                "c sliceAssignmentsSeconds 0.03",
                "c sliceWidth 5",
                "c s log10-estimate 12.6532",
            ],
        );
        assert_eq!(
            records,
            vec![
                "dvtime:0.01",
                "svtime:0.02",
                "satime:0.03",
                "swidth:5",
                "log10:12.6532"
            ]
        );
    }

    #[test]
    fn test_every_exact_line_reports_solution() {
        let (records, _) = run(
            SolverKind::DMC,
            &["c s exact arb int 42", "c s exact double prec-sci 4.2e+01"],
        );
        assert_eq!(records, vec!["sol:42", "sol:4.2e+01"]);
    }

    #[test]
    fn test_malformed_values_are_skipped() {
        let (records, ctx) = run(
            SolverKind::DMC,
            &["c joinTreeWidth ten", "c plannerSeconds soon", "c joinTreeWidth"],
        );
        assert!(records.is_empty());
        assert!(ctx.tracker.widths().is_empty());
        assert!(ctx.tracker.times().is_empty());
    }

    #[test]
    fn test_similar_prefixes_do_not_match() {
        let (records, _) = run(SolverKind::DMC, &["c s type mc", "c sat 1", "s SATISFIABLE"]);
        assert!(records.is_empty());
    }
}
