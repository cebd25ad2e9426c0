//! Savings Calculation Module
//!
//! Converts a count of saved tokens into the physical and economic quantities
//! reported by the harness: energy, emissions, money and energy cost.
//!
//! All conversions are pure functions of the token count and an injected
//! [`SavingsRates`] table. Nothing here rounds; formatting for display lives in
//! [`utils`].

pub mod calculator;
pub mod types;
pub mod utils;

// Re-export main types and functions
pub use calculator::{
    SavingsCalculator, emissions_saved, energy_cost_savings, energy_saved, money_saved,
};
pub use types::{SavingsBreakdown, SavingsRates};
pub use utils::{format_currency, format_kg_co2, format_kwh};
