//! # XiaoPrompt Harness
//!
//! Manual integration-test harness for the XiaoPrompt Optimizer web service.
//!
//! ## Features
//!
//! - **Savings Calculator**: converts tokens saved into energy (kWh),
//!   emissions (kg CO2e), electricity cost and token cost, with injectable rates
//! - **Optimizer Client**: typed access to the optimize, batch and save endpoints
//! - **Test Runner**: health probe, single optimization, strategy sweep and
//!   batch checks, each reported to the console and persisted to the dashboard
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use xiaoprompt_harness::client::ConfigBuilder;
//! use xiaoprompt_harness::runner::{TestRunner, default_prompts};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ConfigBuilder::new().base_url("http://localhost:3000").build();
//!     let mut runner = TestRunner::new(config)?;
//!     let summary = runner.run_all(&default_prompts()).await;
//!     println!("completed: {}", summary.completed);
//!     Ok(())
//! }
//! ```
//!
//! ## Savings only
//!
//! ```rust
//! use xiaoprompt_harness::savings::{SavingsCalculator, SavingsRates};
//!
//! let calculator = SavingsCalculator::new(SavingsRates::default());
//! let breakdown = calculator.breakdown(1000.0);
//! assert!((breakdown.money - 2.0).abs() < 1e-12);
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod client;
pub mod runner;
pub mod savings;
pub mod utils;

// Re-export main types
pub use client::{ClientConfig, ClientError, OptimizerClient, Strategy};
pub use runner::{RunSummary, TestRunner};
pub use savings::{SavingsCalculator, SavingsRates};
pub use utils::error::{HarnessError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information captured by `build.rs`
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Seconds since the Unix epoch
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: env!("BUILD_TIME"),
            git_hash: env!("GIT_HASH"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
