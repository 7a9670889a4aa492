//! Yearly cash-flow projection over the forecast horizon

use super::costs::CostSummary;
use crate::inputs::{InputParameters, FORECAST_YEARS};
use serde::{Deserialize, Serialize};

/// Year 0 (up-front NRE) plus each forecast year
pub const CASH_FLOW_LEN: usize = FORECAST_YEARS + 1;

/// Projected cash flows for years 0..=5
///
/// The terminal value is kept apart from `flows`; it only enters NPV when the
/// analysis asks for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowProjection {
    pub flows: [f64; CASH_FLOW_LEN],
    pub year5_cash_flow: f64,
    pub terminal_value: f64,
}

impl CashFlowProjection {
    pub fn project(input: &InputParameters, costs: &CostSummary) -> Self {
        let mut flows = [0.0; CASH_FLOW_LEN];
        flows[0] = -costs.nre;
        for (year, flow) in flows.iter_mut().enumerate().skip(1) {
            *flow = costs.annual_margin * input.ramp_fraction(year);
        }

        let year5_cash_flow = flows[FORECAST_YEARS];
        let terminal_value = year5_cash_flow * input.terminal_multiple;

        Self {
            flows,
            year5_cash_flow,
            terminal_value,
        }
    }
}
