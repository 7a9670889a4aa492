//! Input parameter set for a single part analysis

use serde::{Deserialize, Serialize};

/// Number of forecast years after the up-front investment
pub const FORECAST_YEARS: usize = 5;

/// Free-text project metadata, carried through to reports untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectMetadata {
    /// OEM part number being developed as a PMA replacement
    pub part_number: String,
    /// Development partner
    pub partner: String,
    pub sales_director: String,
    pub notes: String,
}

/// Pass/fail criteria for the three decision metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum acceptable NPV (currency)
    pub npv: f64,
    /// Minimum acceptable IRR, as a percentage (20.0 = 20%)
    pub irr: f64,
    /// Maximum acceptable payback period in years
    pub payback: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            npv: 0.0,
            irr: 20.0,
            payback: 4.3,
        }
    }
}

/// Everything the engine needs to evaluate one part
///
/// Values are taken as given: negative or zero costs are not rejected, they just
/// flow through the arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputParameters {
    pub metadata: ProjectMetadata,

    // Non-recurring engineering costs
    pub oem_unit_cost: f64,
    pub oem_unit_qty: f64,
    pub materials_inspection_cost: f64,
    pub labor_hours: f64,
    pub labor_rate: f64,
    pub pma_fee: f64,
    pub der_fee: f64,

    // Revenue & margin
    pub sell_price: f64,
    pub unit_cost: f64,
    pub annual_qty: f64,

    /// Percent of steady-state annual margin realised in years 1..5.
    /// Entries past the end of the vector count as 0%.
    pub ramp_rates: Vec<f64>,
    /// Multiple of year-5 cash flow used as terminal value
    pub terminal_multiple: f64,
    pub use_terminal_value: bool,
    /// Annual discount rate as a percentage (10.0 = 10%)
    pub discount_rate: f64,

    pub thresholds: Thresholds,
}

impl InputParameters {
    /// Ramp rate for forecast year `year` (1-based), in percent.
    ///
    /// Missing and NaN entries read as 0.
    pub fn ramp_percent(&self, year: usize) -> f64 {
        year.checked_sub(1)
            .and_then(|idx| self.ramp_rates.get(idx))
            .copied()
            .filter(|rate| !rate.is_nan())
            .unwrap_or(0.0)
    }

    pub fn ramp_fraction(&self, year: usize) -> f64 {
        self.ramp_percent(year) / 100.0
    }

    /// Discount rate as a per-period fraction
    pub fn discount_fraction(&self) -> f64 {
        self.discount_rate / 100.0
    }
}

impl Default for InputParameters {
    /// The reference analysis new projects start from
    fn default() -> Self {
        Self {
            metadata: ProjectMetadata::default(),
            oem_unit_cost: 3715.0,
            oem_unit_qty: 3.0,
            materials_inspection_cost: 1400.0,
            labor_hours: 24.0,
            labor_rate: 100.0,
            pma_fee: 8000.0,
            der_fee: 0.0,
            sell_price: 1875.0,
            unit_cost: 1125.0,
            annual_qty: 30.0,
            ramp_rates: vec![23.0, 35.0, 53.0, 55.0, 55.0],
            terminal_multiple: 7.0,
            use_terminal_value: true,
            discount_rate: 10.0,
            thresholds: Thresholds::default(),
        }
    }
}
