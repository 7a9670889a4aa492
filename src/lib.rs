//! PMA Feasibility - investment screening for aviation PMA parts development
//!
//! This library provides:
//! - Non-recurring engineering (NRE) cost and margin aggregation
//! - Five-year cash-flow projection with ramp rates and terminal value
//! - NPV, IRR (bisection) and payback period
//! - Pass/fail assessment against thresholds with a GREEN/YELLOW/RED status
//! - Report formatting and CSV export, JSON/CSV input loading

pub mod error;
pub mod inputs;
pub mod engine;
pub mod report;

// Re-export commonly used types
pub use error::{FeasibilityError, Result};
pub use inputs::{InputParameters, ProjectMetadata, Thresholds};
pub use engine::{evaluate, CalculationResult, PaybackPeriod, Status};
pub use report::{format_currency, format_percentage};
