//! Savings Calculation Types

use serde::{Deserialize, Serialize};

/// Massachusetts average electricity rate, currency per kWh
pub const DEFAULT_ELECTRICITY_COST_PER_KWH: f64 = 0.305;
/// Grams of CO2-equivalent emitted per kWh on the Massachusetts grid
pub const DEFAULT_GRID_CARBON_INTENSITY: f64 = 416.0;
/// 0.04 kWh per 1000 tokens
pub const DEFAULT_ENERGY_PER_TOKEN: f64 = 0.00004;
/// Currency saved per token
pub const DEFAULT_COST_PER_TOKEN: f64 = 0.002;

/// Conversion rates used by the savings calculator
///
/// The defaults are the Massachusetts figures the optimizer dashboard reports
/// against. Use the `with_*` methods to model a different region or pricing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsRates {
    /// Electricity price, currency per kWh
    pub electricity_cost_per_kwh: f64,
    /// Grid carbon intensity, grams CO2e per kWh
    pub grid_carbon_intensity_g_per_kwh: f64,
    /// Energy consumed per token, kWh
    pub energy_per_token_kwh: f64,
    /// Money saved per token, currency
    pub cost_per_token: f64,
}

impl Default for SavingsRates {
    fn default() -> Self {
        Self {
            electricity_cost_per_kwh: DEFAULT_ELECTRICITY_COST_PER_KWH,
            grid_carbon_intensity_g_per_kwh: DEFAULT_GRID_CARBON_INTENSITY,
            energy_per_token_kwh: DEFAULT_ENERGY_PER_TOKEN,
            cost_per_token: DEFAULT_COST_PER_TOKEN,
        }
    }
}

impl SavingsRates {
    pub fn with_electricity_cost_per_kwh(mut self, rate: f64) -> Self {
        self.electricity_cost_per_kwh = rate;
        self
    }

    pub fn with_grid_carbon_intensity(mut self, grams_per_kwh: f64) -> Self {
        self.grid_carbon_intensity_g_per_kwh = grams_per_kwh;
        self
    }

    pub fn with_energy_per_token(mut self, kwh: f64) -> Self {
        self.energy_per_token_kwh = kwh;
        self
    }

    pub fn with_cost_per_token(mut self, cost: f64) -> Self {
        self.cost_per_token = cost;
        self
    }

    /// Grid carbon intensity converted to kg CO2e per kWh
    pub fn carbon_intensity_kg_per_kwh(&self) -> f64 {
        self.grid_carbon_intensity_g_per_kwh / 1000.0
    }
}

/// All derived quantities for one token-savings figure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavingsBreakdown {
    /// Input token count
    pub tokens_saved: f64,
    /// kWh
    pub energy_kwh: f64,
    /// kg CO2e
    pub emissions_kg: f64,
    /// Electricity cost of the saved energy
    pub energy_cost: f64,
    /// Token cost saved
    pub money: f64,
}
