//! Validation runs and their reports.
//!
//! [`ValidationEngine::run`] validates the input once, resolves the
//! critical values once, evaluates the four tests against the same
//! sequence and collects everything into an immutable [`TestReport`].

mod engine;
mod summary;
mod table;

pub use engine::{run, EngineConfig, ValidationEngine};
pub use summary::TestReport;
pub use table::ReportRow;
