//! Sectioned CSV report for a single analysis

use super::format::{format_currency, format_payback, format_percentage};
use super::table::cash_flow_table;
use crate::engine::CalculationResult;
use crate::error::Result;
use crate::inputs::InputParameters;
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use std::io::Write;

pub const REPORT_TITLE: &str = "ACS New Product Development Financial Analyzer";

fn or_not_specified(value: &str) -> &str {
    if value.trim().is_empty() {
        "Not specified"
    } else {
        value
    }
}

fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "PASS"
    } else {
        "FAIL"
    }
}

/// Write the full report: inputs by section, results against thresholds, the
/// cash-flow table and any analysis notes.
///
/// Every cell is quoted and rows vary in width, matching the spreadsheet layout the
/// report is read in.
pub fn write_csv_report<W: Write>(
    writer: W,
    input: &InputParameters,
    result: &CalculationResult,
    report_date: NaiveDate,
) -> Result<()> {
    let mut wtr = WriterBuilder::new()
        .flexible(true)
        .quote_style(QuoteStyle::Always)
        .from_writer(writer);

    let meta = &input.metadata;
    let thr = &input.thresholds;

    wtr.write_record([REPORT_TITLE])?;
    wtr.write_record(["Export Date", report_date.format("%-m/%-d/%Y").to_string().as_str()])?;
    wtr.write_record(["", ""])?;

    wtr.write_record(["PROJECT METADATA", "", ""])?;
    wtr.write_record(["Field", "Value", ""])?;
    wtr.write_record(["OEM PN", or_not_specified(&meta.part_number), ""])?;
    wtr.write_record(["Development Partner", or_not_specified(&meta.partner), ""])?;
    wtr.write_record(["Sales Director", or_not_specified(&meta.sales_director), ""])?;
    wtr.write_record(["", "", ""])?;

    wtr.write_record(["COST BREAKDOWN INPUTS (NRE)", "", ""])?;
    wtr.write_record(["Parameter", "Value", "Calculated Result"])?;
    wtr.write_record(["OEM Parts Cost (per unit)", format_currency(input.oem_unit_cost).as_str(), ""])?;
    wtr.write_record(["OEM Parts Qty", input.oem_unit_qty.to_string().as_str(), ""])?;
    wtr.write_record(["OEM Parts Investment", "", format_currency(result.oem_investment).as_str()])?;
    wtr.write_record(["Materials Inspection", format_currency(input.materials_inspection_cost).as_str(), ""])?;
    wtr.write_record(["In-house Labor Hours", input.labor_hours.to_string().as_str(), ""])?;
    wtr.write_record(["Labor Rate ($/hr)", format_currency(input.labor_rate).as_str(), ""])?;
    wtr.write_record(["Labor Cost Total", "", format_currency(result.labor_cost).as_str()])?;
    wtr.write_record(["PMA Application Fee", format_currency(input.pma_fee).as_str(), ""])?;
    wtr.write_record(["DER Fee", format_currency(input.der_fee).as_str(), ""])?;
    wtr.write_record(["TOTAL NRE COST", "", format_currency(result.nre).as_str()])?;
    wtr.write_record(["", "", ""])?;

    wtr.write_record(["REVENUE & MARGIN INPUTS", "", ""])?;
    wtr.write_record(["Parameter", "Value", "Calculated Result"])?;
    wtr.write_record(["PMA Part SP (sell price)", format_currency(input.sell_price).as_str(), ""])?;
    wtr.write_record(["PMA Part CP (cost)", format_currency(input.unit_cost).as_str(), ""])?;
    wtr.write_record(["Unit Margin", "", format_currency(result.unit_margin).as_str()])?;
    wtr.write_record(["Est Sales Qty (annual)", input.annual_qty.to_string().as_str(), ""])?;
    wtr.write_record(["Est Annual Sales", "", format_currency(result.annual_revenue).as_str()])?;
    wtr.write_record(["Est Annual Margin Dollars", "", format_currency(result.annual_margin).as_str()])?;
    wtr.write_record(["", "", ""])?;

    wtr.write_record(["RAMP & TERMINAL INPUTS", "", ""])?;
    wtr.write_record(["Parameter", "Value", "Notes"])?;
    for year in 1..result.cash_flows.len() {
        wtr.write_record([
            format!("RR Y{} (%)", year),
            format!("{}%", input.ramp_percent(year)),
            format!("Ramp Rate Year {}", year),
        ])?;
    }
    wtr.write_record(["Y5 Cash Flow", "", format_currency(result.year5_cash_flow).as_str()])?;
    wtr.write_record(["Terminal Multiple × Y5 CF", input.terminal_multiple.to_string().as_str(), ""])?;
    wtr.write_record(["Terminal Value", "", format_currency(result.terminal_value).as_str()])?;
    wtr.write_record([
        "Use Terminal Value in NPV",
        if input.use_terminal_value { "Yes" } else { "No" },
        "",
    ])?;
    wtr.write_record([
        "Discount Rate (%)",
        format!("{}%", input.discount_rate).as_str(),
        "WACC or required return",
    ])?;
    wtr.write_record(["", "", ""])?;

    wtr.write_record(["ANALYSIS RESULTS", "", ""])?;
    wtr.write_record(["Metric", "Result", "Threshold", "Status"])?;
    wtr.write_record([
        "NPV (with TV if enabled)",
        format_currency(result.npv).as_str(),
        format_currency(thr.npv).as_str(),
        pass_fail(result.pass_npv),
    ])?;
    wtr.write_record([
        "IRR (5y, no TV)",
        format_percentage(result.irr_value()).as_str(),
        format!("{}%", thr.irr).as_str(),
        pass_fail(result.pass_irr),
    ])?;
    wtr.write_record([
        "Payback Period",
        format_payback(result.payback_period).as_str(),
        format!("{} years", thr.payback).as_str(),
        pass_fail(result.pass_pbp),
    ])?;
    wtr.write_record(["", "", "", ""])?;
    wtr.write_record([
        "Overall Status",
        result.status.to_string().as_str(),
        format!("{}/3 criteria passed", result.pass_count).as_str(),
        result.status.message(),
    ])?;
    wtr.write_record(["", "", "", ""])?;

    wtr.write_record(["CASH FLOW ANALYSIS", "", "", ""])?;
    wtr.write_record(["Year", "Cash Flow", "Calculation Notes", "Cumulative"])?;
    for row in cash_flow_table(input, result) {
        let note = if row.is_terminal_value {
            "Terminal Value"
        } else {
            row.note.as_str()
        };
        wtr.write_record([
            row.year.as_str(),
            format_currency(row.cash_flow).as_str(),
            note,
            format_currency(row.cumulative).as_str(),
        ])?;
    }
    wtr.write_record(["", "", "", ""])?;

    if !meta.notes.trim().is_empty() {
        wtr.write_record(["ANALYSIS NOTES", "", "", ""])?;
        wtr.write_record([meta.notes.as_str(), "", "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}
