//! Optimizer service client
//!
//! Typed access to the four endpoints the harness exercises: the service info
//! probe, single and batch optimization, and the save endpoint that feeds the
//! dashboard.

mod client;
pub mod config;
pub mod errors;
pub mod types;

// Re-exports for convenience
pub use client::{BATCH_PATH, OPTIMIZE_PATH, OptimizerClient, SAVE_PATH};
pub use config::{ClientConfig, ConfigBuilder, Timeouts};
pub use errors::{ClientError, Result};
pub use types::*;
