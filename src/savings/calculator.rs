//! Savings Calculator
//!
//! Core conversion logic. The free functions delegate to a calculator built
//! from [`SavingsRates::default`].

use crate::savings::types::{SavingsBreakdown, SavingsRates};

/// Stateless converter from tokens saved to derived savings
///
/// Negative token counts are not rejected; they flow through the arithmetic
/// and produce negative savings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SavingsCalculator {
    rates: SavingsRates,
}

impl SavingsCalculator {
    pub fn new(rates: SavingsRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &SavingsRates {
        &self.rates
    }

    /// Energy saved in kWh
    pub fn energy_saved(&self, tokens_saved: f64) -> f64 {
        tokens_saved * self.rates.energy_per_token_kwh
    }

    /// Emissions saved in kg CO2e
    pub fn emissions_saved(&self, tokens_saved: f64) -> f64 {
        self.energy_saved(tokens_saved) * self.rates.carbon_intensity_kg_per_kwh()
    }

    /// Electricity cost of the energy saved
    pub fn energy_cost_savings(&self, tokens_saved: f64) -> f64 {
        self.energy_saved(tokens_saved) * self.rates.electricity_cost_per_kwh
    }

    /// Token cost saved
    pub fn money_saved(&self, tokens_saved: f64) -> f64 {
        tokens_saved * self.rates.cost_per_token
    }

    pub fn breakdown(&self, tokens_saved: f64) -> SavingsBreakdown {
        SavingsBreakdown {
            tokens_saved,
            energy_kwh: self.energy_saved(tokens_saved),
            emissions_kg: self.emissions_saved(tokens_saved),
            energy_cost: self.energy_cost_savings(tokens_saved),
            money: self.money_saved(tokens_saved),
        }
    }
}

/// Energy saved in kWh at the default rates
pub fn energy_saved(tokens_saved: f64) -> f64 {
    SavingsCalculator::default().energy_saved(tokens_saved)
}

/// Emissions saved in kg CO2e at the default rates
pub fn emissions_saved(tokens_saved: f64) -> f64 {
    SavingsCalculator::default().emissions_saved(tokens_saved)
}

/// Electricity cost of the energy saved at the default rates
pub fn energy_cost_savings(tokens_saved: f64) -> f64 {
    SavingsCalculator::default().energy_cost_savings(tokens_saved)
}

/// Token cost saved at the default rates
pub fn money_saved(tokens_saved: f64) -> f64 {
    SavingsCalculator::default().money_saved(tokens_saved)
}
