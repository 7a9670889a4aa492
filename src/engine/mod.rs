//! Financial engine: inputs in, cash flows and decision metrics out
//!
//! Everything here is a pure function of `InputParameters`. Degenerate inputs never
//! error; they show up as a missing IRR, an undefined/never payback, or non-finite
//! NPV on the result.

mod cashflows;
mod costs;
mod irr;
mod npv;
mod payback;
mod status;

pub use cashflows::{CashFlowProjection, CASH_FLOW_LEN};
pub use costs::CostSummary;
pub use irr::calculate_irr;
pub use npv::npv;
pub use payback::{calculate_payback, PaybackPeriod};
pub use status::{CriteriaOutcome, Status};

use crate::inputs::InputParameters;
use log::trace;
use serde::{Deserialize, Serialize};

/// Complete evaluation of one part analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    // Intermediate figures
    pub oem_investment: f64,
    pub labor_cost: f64,
    pub nre: f64,
    pub annual_revenue: f64,
    pub unit_margin: f64,
    pub annual_margin: f64,

    /// Years 0..=5; year 0 is the negative NRE. Never includes terminal value.
    pub cash_flows: [f64; CASH_FLOW_LEN],
    pub year5_cash_flow: f64,
    pub terminal_value: f64,

    /// NPV at the analysis discount rate, including terminal value when enabled
    pub npv: f64,
    /// IRR of `cash_flows` alone, as a fraction; None when no root is bracketed
    pub irr: Option<f64>,
    pub payback_period: PaybackPeriod,

    pub pass_npv: bool,
    pub pass_irr: bool,
    pub pass_pbp: bool,
    pub pass_count: u8,
    pub status: Status,
}

impl CalculationResult {
    /// IRR with "no solution" encoded as NaN
    pub fn irr_value(&self) -> f64 {
        self.irr.unwrap_or(f64::NAN)
    }

    /// Payback with "never" as +inf and "undefined" as NaN
    pub fn payback_value(&self) -> f64 {
        self.payback_period.as_f64()
    }
}

/// Evaluate a part analysis.
///
/// Identical inputs always produce bit-identical results.
pub fn evaluate(input: &InputParameters) -> CalculationResult {
    let costs = CostSummary::from_inputs(input);
    let projection = CashFlowProjection::project(input, &costs);

    let terminal_value = input
        .use_terminal_value
        .then_some(projection.terminal_value);
    let npv = npv(input.discount_fraction(), &projection.flows, terminal_value);
    let irr = calculate_irr(&projection.flows);
    let payback_period = calculate_payback(&projection.flows);

    let criteria = CriteriaOutcome::assess(&input.thresholds, npv, irr, payback_period);

    trace!(
        "Evaluated {:?}: npv={} irr={:?} payback={:?} status={}",
        input.metadata.part_number,
        npv,
        irr,
        payback_period,
        criteria.status
    );

    CalculationResult {
        oem_investment: costs.oem_investment,
        labor_cost: costs.labor_cost,
        nre: costs.nre,
        annual_revenue: costs.annual_revenue,
        unit_margin: costs.unit_margin,
        annual_margin: costs.annual_margin,
        cash_flows: projection.flows,
        year5_cash_flow: projection.year5_cash_flow,
        terminal_value: projection.terminal_value,
        npv,
        irr,
        payback_period,
        pass_npv: criteria.pass_npv,
        pass_irr: criteria.pass_irr,
        pass_pbp: criteria.pass_pbp,
        pass_count: criteria.pass_count,
        status: criteria.status,
    }
}
