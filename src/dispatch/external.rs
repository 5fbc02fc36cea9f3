//! Interpreters for the independent solvers.

use super::{BodyInterpreter, last_word, solution};
use crate::context::RunContext;
use crate::errors::PostprocessError;
use crate::record::Record;
use crate::signaler::{Signal, Signaler, signal_pids};

/// `erssat`: `  > Satisfying probability: 0.25`
#[derive(Debug, Clone, Copy)]
pub struct ErssatInterpreter;

impl BodyInterpreter for ErssatInterpreter {
    fn interpret(
        &self,
        line: &str,
        _ctx: &mut RunContext,
        _signaler: &mut dyn Signaler,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError> {
        if line.starts_with("  > Satisfying probability:") {
            push_last_word(line, records);
        }
        Ok(())
    }
}

/// `dcssat`: `Pr[SAT] = 0.25`
#[derive(Debug, Clone, Copy)]
pub struct DcssatInterpreter;

impl BodyInterpreter for DcssatInterpreter {
    fn interpret(
        &self,
        line: &str,
        _ctx: &mut RunContext,
        _signaler: &mut dyn Signaler,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError> {
        if line.starts_with("Pr[SAT]") {
            push_last_word(line, records);
        }
        Ok(())
    }
}

/// countAntom.
///
/// countAntom keeps running after printing its verdict, so the verdict line
/// terminates it. The wrapper reports the pid of the `sh` it spawned;
/// runsolver is the next pid.
#[derive(Debug, Clone, Copy)]
pub struct AntomInterpreter;

impl BodyInterpreter for AntomInterpreter {
    fn interpret(
        &self,
        line: &str,
        ctx: &mut RunContext,
        signaler: &mut dyn Signaler,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError> {
        if line.starts_with("c model count") {
            match line.split(": ").nth(1) {
                Some(count) => records.push(solution(count)),
                None => tracing::debug!(line, "skipping model count without value"),
            }
        } else if line.starts_with("s ") {
            let [shell_pid] = ctx.pids.as_slice() else {
                return Err(PostprocessError::PidContract {
                    solver: "antom".to_string(),
                    count: ctx.pids.len(),
                });
            };
            let Some(runner_pid) = shell_pid.checked_add(1) else {
                return Err(PostprocessError::PidOutOfRange {
                    solver: "antom".to_string(),
                    pid: *shell_pid,
                });
            };
            signal_pids(signaler, &[runner_pid], Signal::Terminate);
        }
        Ok(())
    }
}

/// `nesthdb`: `PMC: 42`
#[derive(Debug, Clone, Copy)]
pub struct NesthdbInterpreter;

impl BodyInterpreter for NesthdbInterpreter {
    fn interpret(
        &self,
        line: &str,
        _ctx: &mut RunContext,
        _signaler: &mut dyn Signaler,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError> {
        if line.starts_with("PMC:") {
            push_last_word(line, records);
        }
        Ok(())
    }
}

/// d4 in both its `d4p` and `projmc` modes: `s 42`
#[derive(Debug, Clone, Copy)]
pub struct D4Interpreter;

impl BodyInterpreter for D4Interpreter {
    fn interpret(
        &self,
        line: &str,
        _ctx: &mut RunContext,
        _signaler: &mut dyn Signaler,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError> {
        if line.starts_with("s ") {
            if let Some(value) = line.split_whitespace().nth(1) {
                records.push(solution(value));
            }
        }
        Ok(())
    }
}

/// CryptoMiniSat: `s SATISFIABLE` / `s UNSATISFIABLE`, reported as `1` / `0`.
#[derive(Debug, Clone, Copy)]
pub struct MinisatInterpreter;

impl BodyInterpreter for MinisatInterpreter {
    fn interpret(
        &self,
        line: &str,
        _ctx: &mut RunContext,
        _signaler: &mut dyn Signaler,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError> {
        if line.starts_with("s ") {
            let satisfiable = line.split_whitespace().nth(1) == Some("SATISFIABLE");
            records.push(Record::flag("sol", satisfiable));
        }
        Ok(())
    }
}

fn push_last_word(line: &str, records: &mut Vec<Record>) {
    if let Some(value) = last_word(line) {
        records.push(solution(value));
    }
}
