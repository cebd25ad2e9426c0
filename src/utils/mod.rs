//! Shared utilities
//!
//! Process-level error taxonomy, logging setup and environment checks.

pub mod error;
pub mod logging;
pub mod sys;

// Re-export commonly used types and functions
pub use error::{HarnessError, Result};
pub use logging::{LogLevel, init_logger};
pub use sys::verify_working_directory;
