//! Display helpers for savings figures
//!
//! The calculator never rounds; these are the only place precision is chosen.

/// Format a currency amount, with more decimals for small values
pub fn format_currency(amount: f64) -> String {
    let magnitude = amount.abs();
    if magnitude < 0.01 {
        format!("${:.6}", amount)
    } else if magnitude < 1.0 {
        format!("${:.4}", amount)
    } else {
        format!("${:.2}", amount)
    }
}

pub fn format_kwh(kwh: f64) -> String {
    format!("{:.6} kWh", kwh)
}

pub fn format_kg_co2(kg: f64) -> String {
    format!("{:.6} kg CO2", kg)
}
