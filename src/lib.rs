pub mod config;
pub mod context;
pub mod dispatch;
pub mod errors;
pub mod postprocessor;
pub mod record;
pub mod runner;
pub mod signaler;
pub mod solver;
pub mod stream;
pub mod tracker;

pub use context::{Phase, RunContext};
pub use errors::PostprocessError;
pub use postprocessor::{Postprocessor, SENTINEL};
pub use record::Record;
pub use solver::{Decomposer, DpmcRole, SolverKind};
pub use stream::{RunSummary, process_stream};
