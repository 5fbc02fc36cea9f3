//! Phase state machine over the wrapper/solver/runner line stream.
//!
//! The input interleaves three producers:
//!
//! ```text
//! c cf bench.cnf          <- wrapper header (preamble)
//! c solver dmc
//! c pid 123
//!                         <- first non-header line: solver body begins
//! c joinTreeWidth 10
//! c s exact arb int 42
//! #                       <- sentinel: runner diagnostics follow
//! WCTIME=3.0
//! EXITSTATUS=0
//! ```
//!
//! Each line is classified by the current [`Phase`] and handed to exactly one
//! parser. The tree summary is flushed once, at the sentinel or at the end of
//! the stream if the sentinel never arrives.

use std::path::Path;

use crate::context::{Phase, RunContext};
use crate::dispatch::{BodyInterpreter, interpreter_for};
use crate::errors::PostprocessError;
use crate::record::Record;
use crate::runner::parse_runner_line;
use crate::signaler::{ProcessSignaler, Signaler};
use crate::solver::{Decomposer, SolverKind};

/// Line separating solver output from runner diagnostics.
pub const SENTINEL: &str = "#";

/// Header keys printed by the wrapper as `c <key> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeaderKey {
    BenchmarkPath,
    Solver,
    Decomposer,
    Pid,
}

impl HeaderKey {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "cf" => Some(HeaderKey::BenchmarkPath),
            "solver" => Some(HeaderKey::Solver),
            "decomposer" => Some(HeaderKey::Decomposer),
            "pid" => Some(HeaderKey::Pid),
            _ => None,
        }
    }
}

/// Split a header line into its key and value (the last token).
///
/// A header without a value yields `Some((key, None))` so it can still be
/// consumed as a malformed header.
fn parse_header(line: &str) -> Option<(HeaderKey, Option<&str>)> {
    let mut words = line.split_whitespace();
    if words.next() != Some("c") {
        return None;
    }
    let key = HeaderKey::from_word(words.next()?)?;
    Some((key, words.next_back()))
}

/// Single-pass interpreter for one benchmark run.
pub struct Postprocessor<S: Signaler = ProcessSignaler> {
    ctx: RunContext,
    interpreter: Option<Box<dyn BodyInterpreter>>,
    signaler: S,
}

impl Postprocessor<ProcessSignaler> {
    pub fn new(echo: bool) -> Self {
        Self::with_signaler(echo, ProcessSignaler)
    }
}

impl<S: Signaler> Postprocessor<S> {
    pub fn with_signaler(echo: bool, signaler: S) -> Self {
        Self {
            ctx: RunContext::new(echo),
            interpreter: None,
            signaler,
        }
    }

    pub fn context(&self) -> &RunContext {
        &self.ctx
    }

    pub fn signaler(&self) -> &S {
        &self.signaler
    }

    /// Whether input lines should be echoed.
    pub fn echo(&self) -> bool {
        self.ctx.echo
    }

    /// Classify one input line and return the records it produces.
    ///
    /// Trailing whitespace is ignored. Lines that match nothing produce no
    /// records; only wrapper contract violations are errors.
    pub fn process_line(&mut self, raw: &str) -> Result<Vec<Record>, PostprocessError> {
        let line = raw.trim_end();
        let mut records = Vec::new();

        if line == SENTINEL && self.ctx.advance(Phase::PostSolve) {
            records.extend(self.ctx.tracker.flush());
            return Ok(records);
        }

        match self.ctx.phase {
            Phase::Preamble => {
                if let Some((key, value)) = parse_header(line) {
                    self.apply_header(key, value, &mut records)?;
                } else {
                    self.ctx.advance(Phase::Body);
                    self.interpret_body(line, &mut records)?;
                }
            }
            Phase::Body => match parse_header(line) {
                // The planner reports its own pid from inside the body.
                Some((HeaderKey::Pid, value)) => {
                    self.apply_header(HeaderKey::Pid, value, &mut records)?
                }
                _ => self.interpret_body(line, &mut records)?,
            },
            Phase::PostSolve => {
                records.extend(parse_runner_line(line, self.ctx.solver, &self.ctx.tracker));
            }
        }

        Ok(records)
    }

    /// End of stream. Flushes the tree summary if the sentinel never arrived.
    ///
    /// Calling this more than once is harmless.
    pub fn finish(&mut self) -> Vec<Record> {
        let reached_post_solve = self.ctx.phase == Phase::PostSolve;
        if !self.ctx.advance(Phase::PostSolve) {
            return Vec::new();
        }
        if !reached_post_solve {
            tracing::warn!("stream ended before runner diagnostics");
        }
        self.ctx.tracker.flush()
    }

    fn apply_header(
        &mut self,
        key: HeaderKey,
        value: Option<&str>,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError> {
        let Some(value) = value else {
            tracing::debug!(?key, "skipping header without value");
            return Ok(());
        };

        match key {
            HeaderKey::BenchmarkPath => {
                if self.ctx.base.is_some() {
                    tracing::warn!(value, "ignoring repeated benchmark header");
                    return Ok(());
                }
                let base = Path::new(value)
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| value.to_string());
                records.push(Record::new("base", base.clone()));
                self.ctx.base = Some(base);
            }
            HeaderKey::Solver => {
                let kind: SolverKind = value.parse()?;
                if let Some(current) = self.ctx.solver {
                    tracing::warn!(%current, ignored = %kind, "ignoring repeated solver header");
                    return Ok(());
                }
                tracing::debug!(solver = %kind, "selected body interpreter");
                self.interpreter = Some(interpreter_for(kind));
                self.ctx.solver = Some(kind);
            }
            HeaderKey::Decomposer => {
                let decomposer: Decomposer = value.parse()?;
                if let Some(current) = self.ctx.decomposer {
                    tracing::warn!(
                        %current,
                        ignored = %decomposer,
                        "ignoring repeated decomposer header"
                    );
                    return Ok(());
                }
                self.ctx.decomposer = Some(decomposer);
            }
            // kill(2) treats 0 and negative pids as process groups.
            HeaderKey::Pid => match value.parse::<i32>() {
                Ok(pid) if pid > 0 => self.ctx.pids.push(pid),
                Ok(pid) => tracing::debug!(pid, "skipping non-positive pid"),
                Err(e) => tracing::debug!(value, error = %e, "skipping malformed pid"),
            },
        }
        Ok(())
    }

    fn interpret_body(
        &mut self,
        line: &str,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError> {
        match &self.interpreter {
            Some(interpreter) => {
                interpreter.interpret(line, &mut self.ctx, &mut self.signaler, records)
            }
            None => Ok(()),
        }
    }
}
