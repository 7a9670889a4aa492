//! Presentation helpers: display formatting, cash-flow table, CSV report export

mod format;
mod table;
pub mod csv_export;

pub use format::{format_currency, format_percentage, format_payback, PLACEHOLDER};
pub use table::{cash_flow_table, CashFlowTableRow};
pub use csv_export::write_csv_report;
