//! Test runner
//!
//! Orchestrates the optimizer service checks: health probe, single
//! optimization, strategy sweep, batch probe and persistence of each
//! outcome through the save endpoint.

pub mod prompts;
pub mod report;
mod runner;
pub mod summary;

pub use prompts::default_prompts;
pub use report::{CapturedOutput, Reporter};
pub use runner::TestRunner;
pub use summary::{RunStats, RunSummary, StrategySweep};
