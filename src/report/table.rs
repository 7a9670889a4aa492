//! Year-by-year cash-flow table with running totals and the breakeven marker

use crate::engine::CalculationResult;
use crate::inputs::InputParameters;
use serde::{Deserialize, Serialize};

/// One line of the cash-flow table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowTableRow {
    /// "0".."5", or "5 (TV)" for the terminal value line
    pub year: String,
    pub cash_flow: f64,
    pub note: String,
    /// Running total including this row
    pub cumulative: f64,
    /// First forecast year where the running total turns non-negative
    pub is_breakeven: bool,
    pub is_terminal_value: bool,
}

/// Build the table for years 0..=5, plus a terminal-value row when it is used in NPV.
///
/// Year rows carry the running total of the cash flows alone. The terminal-value row
/// shows year-5 cumulative plus the terminal value, as in the exported report; it
/// never feeds back into the year rows or marks breakeven. The CLI printout shows
/// the year-5 total on that row instead, like the on-screen table.
pub fn cash_flow_table(input: &InputParameters, result: &CalculationResult) -> Vec<CashFlowTableRow> {
    let mut rows = Vec::with_capacity(result.cash_flows.len() + 1);
    let mut cumulative = 0.0;
    let mut breakeven_found = false;

    for (year, &cash_flow) in result.cash_flows.iter().enumerate() {
        cumulative += cash_flow;

        let is_breakeven = year > 0 && !breakeven_found && cumulative >= 0.0;
        breakeven_found |= is_breakeven;

        let note = if year == 0 {
            "Initial NRE (outflow)".to_string()
        } else {
            format!("Y{0} = EstMargin × RR{0}", year)
        };

        rows.push(CashFlowTableRow {
            year: year.to_string(),
            cash_flow,
            note,
            cumulative,
            is_breakeven,
            is_terminal_value: false,
        });
    }

    if input.use_terminal_value {
        rows.push(CashFlowTableRow {
            year: format!("{} (TV)", result.cash_flows.len() - 1),
            cash_flow: result.terminal_value,
            note: "Terminal Value (Y5 × Multiple)".to_string(),
            cumulative: cumulative + result.terminal_value,
            is_breakeven: false,
            is_terminal_value: true,
        });
    }

    rows
}
