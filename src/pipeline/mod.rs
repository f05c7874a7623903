pub mod context;
pub mod orchestrator;

pub use context::RunContext;
pub use orchestrator::{RunController, RunOutcome, RunReport};
