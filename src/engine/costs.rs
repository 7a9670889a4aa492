//! Non-recurring engineering cost and margin aggregation

use crate::inputs::InputParameters;
use serde::{Deserialize, Serialize};

/// Intermediate cost and margin figures derived directly from the inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostSummary {
    /// OEM parts bought for reverse engineering: unit cost × quantity
    pub oem_investment: f64,
    pub labor_cost: f64,
    /// Total non-recurring engineering cost
    pub nre: f64,
    pub annual_revenue: f64,
    pub unit_margin: f64,
    /// Steady-state margin before the ramp is applied
    pub annual_margin: f64,
}

impl CostSummary {
    pub fn from_inputs(input: &InputParameters) -> Self {
        let oem_investment = input.oem_unit_cost * input.oem_unit_qty;
        let labor_cost = input.labor_hours * input.labor_rate;
        let nre = oem_investment
            + input.materials_inspection_cost
            + labor_cost
            + input.pma_fee
            + input.der_fee;

        let annual_revenue = input.sell_price * input.annual_qty;
        let unit_margin = input.sell_price - input.unit_cost;
        let annual_margin = unit_margin * input.annual_qty;

        Self {
            oem_investment,
            labor_cost,
            nre,
            annual_revenue,
            unit_margin,
            annual_margin,
        }
    }
}
