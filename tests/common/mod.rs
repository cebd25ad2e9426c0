//! Common test utilities for xiaoprompt-harness
//!
//! - `fixtures`: canned optimizer responses
//! - `mock_service`: helpers mounting those responses on a `MockServer`
//! - `assertions`: assertion macros

pub mod assertions;
pub mod fixtures;
pub mod mock_service;

pub use mock_service::MockOptimizer;
