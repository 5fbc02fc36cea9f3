//! Solver-body interpreters.
//!
//! Each external solver announces its results with its own line prefixes.
//! One [`BodyInterpreter`] exists per output format; the postprocessor picks
//! the right one when the wrapper names the solver and keeps it for the
//! rest of the run.
//!
//! | Module     | Solvers                                         |
//! |------------|-------------------------------------------------|
//! | `dpmc`     | `planner`, `dmc`, `dpmc`                        |
//! | `external` | `erssat`, `dcssat`, `antom`, `nesthdb`, `d4p`, `projmc`, `minisat` |

mod dpmc;
mod external;

pub use dpmc::DpmcInterpreter;
pub use external::{
    AntomInterpreter, D4Interpreter, DcssatInterpreter, ErssatInterpreter, MinisatInterpreter,
    NesthdbInterpreter,
};

use crate::context::RunContext;
use crate::errors::PostprocessError;
use crate::record::Record;
use crate::signaler::Signaler;
use crate::solver::SolverKind;

/// Interprets one line of solver output.
///
/// Lines the interpreter does not recognize are skipped silently; solvers
/// print plenty of chatter that carries no result.
pub trait BodyInterpreter {
    fn interpret(
        &self,
        line: &str,
        ctx: &mut RunContext,
        signaler: &mut dyn Signaler,
        records: &mut Vec<Record>,
    ) -> Result<(), PostprocessError>;
}

/// Select the interpreter for a solver.
pub fn interpreter_for(kind: SolverKind) -> Box<dyn BodyInterpreter> {
    match kind {
        SolverKind::Dpmc(role) => Box::new(DpmcInterpreter::new(role)),
        SolverKind::Erssat => Box::new(ErssatInterpreter),
        SolverKind::Dcssat => Box::new(DcssatInterpreter),
        SolverKind::Antom => Box::new(AntomInterpreter),
        SolverKind::Nesthdb => Box::new(NesthdbInterpreter),
        SolverKind::D4p | SolverKind::Projmc => Box::new(D4Interpreter),
        SolverKind::Minisat => Box::new(MinisatInterpreter),
    }
}

/// Last whitespace-separated token of a line.
pub(crate) fn last_word(line: &str) -> Option<&str> {
    line.split_whitespace().next_back()
}

/// The solution record every solver reports.
pub(crate) fn solution(value: impl Into<String>) -> Record {
    Record::new("sol", value)
}
