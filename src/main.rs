//! PMA Feasibility CLI
//!
//! Evaluates a single part analysis and prints the decision summary

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pma_feasibility::{
    evaluate, format_currency, format_percentage,
    inputs::load_analysis,
    report::{cash_flow_table, format_payback, write_csv_report},
    CalculationResult, InputParameters,
};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pma_feasibility", version, about = "NPV / IRR / payback screening for a PMA part")]
struct Args {
    /// Analysis JSON file; the reference analysis is used when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Override the minimum NPV
    #[arg(long, allow_negative_numbers = true)]
    threshold_npv: Option<f64>,

    /// Override the minimum IRR, in percent
    #[arg(long, allow_negative_numbers = true)]
    threshold_irr: Option<f64>,

    /// Override the maximum payback period, in years
    #[arg(long)]
    threshold_pbp: Option<f64>,

    /// Leave terminal value out of NPV
    #[arg(long)]
    no_terminal_value: bool,

    /// Write the full CSV report to this path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print input and result as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct AnalysisOutput<'a> {
    input: &'a InputParameters,
    result: &'a CalculationResult,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut input = match &args.input {
        Some(path) => load_analysis(path)
            .with_context(|| format!("loading analysis from {}", path.display()))?,
        None => InputParameters::default(),
    };

    if let Some(npv) = args.threshold_npv {
        input.thresholds.npv = npv;
    }
    if let Some(irr) = args.threshold_irr {
        input.thresholds.irr = irr;
    }
    if let Some(pbp) = args.threshold_pbp {
        input.thresholds.payback = pbp;
    }
    if args.no_terminal_value {
        input.use_terminal_value = false;
    }

    let result = evaluate(&input);

    if args.json {
        let output = AnalysisOutput {
            input: &input,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_summary(&input, &result);
    }

    if let Some(path) = &args.csv {
        let file = File::create(path)
            .with_context(|| format!("creating report {}", path.display()))?;
        let today = chrono::Local::now().date_naive();
        write_csv_report(BufWriter::new(file), &input, &result, today)
            .with_context(|| format!("writing report {}", path.display()))?;
        info!("CSV report written to {}", path.display());
    }

    Ok(())
}

fn print_summary(input: &InputParameters, result: &CalculationResult) {
    let meta = &input.metadata;
    let thr = &input.thresholds;

    println!("PMA Feasibility v{}", env!("CARGO_PKG_VERSION"));
    println!("======================\n");

    if !meta.part_number.is_empty() {
        println!("Part: {}", meta.part_number);
    }
    println!("  NRE:           {:>14}", format_currency(result.nre));
    println!("  Annual Margin: {:>14}", format_currency(result.annual_margin));
    println!("  Terminal Value:{:>14} ({})", format_currency(result.terminal_value),
        if input.use_terminal_value { "in NPV" } else { "not used" });
    println!();

    println!("{:>6} {:>16} {:>16}  Notes", "Year", "Cash Flow", "Cumulative");
    println!("{}", "-".repeat(70));
    let mut year_total = 0.0;
    for row in cash_flow_table(input, result) {
        let marker = if row.is_breakeven { " (Breakeven)" } else { "" };
        // Terminal value stays out of the running total on screen
        if !row.is_terminal_value {
            year_total = row.cumulative;
        }
        println!("{:>6} {:>16} {:>16}  {}{}",
            row.year,
            format_currency(row.cash_flow),
            format_currency(year_total),
            row.note,
            marker,
        );
    }
    println!();

    let verdict = |passed: bool| if passed { "PASS" } else { "FAIL" };
    println!("  NPV:     {:>14}  target >= {:<12} {}",
        format_currency(result.npv), format_currency(thr.npv), verdict(result.pass_npv));
    println!("  IRR:     {:>14}  target >= {:<12} {}",
        format_percentage(result.irr_value()), format!("{}%", thr.irr), verdict(result.pass_irr));
    println!("  Payback: {:>14}  target <= {:<12} {}",
        format_payback(result.payback_period), format!("{} years", thr.payback), verdict(result.pass_pbp));
    println!();

    println!("Status: {} ({}/3 criteria passed)", result.status, result.pass_count);
    println!("  {}", result.status.message());
}
