//! Run-wide state threaded through a single pass over the stream.

use crate::solver::{Decomposer, SolverKind};
use crate::tracker::TreeTracker;

/// Which part of the run is being read.
///
/// Phases only move forward: `Preamble` → `Body` → `PostSolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Phase {
    /// Wrapper header lines (`c cf`, `c solver`, ...).
    #[default]
    Preamble,
    /// Solver output.
    Body,
    /// Resource supervisor diagnostics after the sentinel.
    PostSolve,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Preamble => write!(f, "preamble"),
            Phase::Body => write!(f, "body"),
            Phase::PostSolve => write!(f, "post-solve"),
        }
    }
}

/// Mutable state for one benchmark run.
#[derive(Debug, Clone, Default)]
pub struct RunContext {
    /// Benchmark name, set once from `c cf`.
    pub base: Option<String>,
    /// Solver, set once from `c solver`.
    pub solver: Option<SolverKind>,
    /// Decomposer, set once from `c decomposer`.
    pub decomposer: Option<Decomposer>,
    /// Reported pids in arrival order; index 0 is the top-level process.
    pub pids: Vec<i32>,
    pub tracker: TreeTracker,
    pub phase: Phase,
    /// Copy every input line to the echo channel.
    pub echo: bool,
}

impl RunContext {
    pub fn new(echo: bool) -> Self {
        Self {
            echo,
            ..Self::default()
        }
    }

    /// Move forward to `phase`. Never moves backwards.
    ///
    /// Returns true if the phase changed.
    pub fn advance(&mut self, phase: Phase) -> bool {
        if phase > self.phase {
            tracing::debug!(from = %self.phase, to = %phase, "phase transition");
            self.phase = phase;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let ctx = RunContext::new(true);
        assert!(ctx.echo);
        assert_eq!(ctx.phase, Phase::Preamble);
        assert!(ctx.pids.is_empty());
        assert!(ctx.solver.is_none());
    }

    #[test]
    fn test_phase_never_regresses() {
        let mut ctx = RunContext::new(false);
        assert!(ctx.advance(Phase::Body));
        assert!(!ctx.advance(Phase::Body));
        assert!(ctx.advance(Phase::PostSolve));
        assert!(!ctx.advance(Phase::Body));
        assert!(!ctx.advance(Phase::Preamble));
        assert_eq!(ctx.phase, Phase::PostSolve);
    }

    #[test]
    fn test_preamble_can_jump_to_post_solve() {
        let mut ctx = RunContext::new(false);
        assert!(ctx.advance(Phase::PostSolve));
        assert_eq!(ctx.phase, Phase::PostSolve);
    }
}
