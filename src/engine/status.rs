//! Pass/fail criteria and the overall traffic-light status

use super::payback::PaybackPeriod;
use crate::inputs::Thresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Green,
    Yellow,
    Red,
}

impl Status {
    pub fn from_pass_count(passes: u8) -> Self {
        match passes {
            3 => Status::Green,
            2 => Status::Yellow,
            _ => Status::Red,
        }
    }

    /// Recommendation shown alongside the status
    pub fn message(&self) -> &'static str {
        match self {
            Status::Green => "All criteria passed - Proceed with development",
            Status::Yellow => "2/3 criteria passed - Review marginal metrics",
            Status::Red => "Insufficient performance - Consider alternatives",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Status::Green => "GREEN",
            Status::Yellow => "YELLOW",
            Status::Red => "RED",
        };
        f.write_str(label)
    }
}

/// Outcome of comparing each metric against its threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaOutcome {
    pub pass_npv: bool,
    pub pass_irr: bool,
    pub pass_pbp: bool,
    pub pass_count: u8,
    pub status: Status,
}

impl CriteriaOutcome {
    pub fn assess(
        thresholds: &Thresholds,
        npv: f64,
        irr: Option<f64>,
        payback: PaybackPeriod,
    ) -> Self {
        let pass_npv = npv >= thresholds.npv;
        let pass_irr = irr.is_some_and(|rate| rate.is_finite() && rate >= thresholds.irr / 100.0);
        let pass_pbp = payback
            .years()
            .is_some_and(|years| years.is_finite() && years <= thresholds.payback);

        let pass_count = [pass_npv, pass_irr, pass_pbp]
            .iter()
            .filter(|&&passed| passed)
            .count() as u8;

        Self {
            pass_npv,
            pass_irr,
            pass_pbp,
            pass_count,
            status: Status::from_pass_count(pass_count),
        }
    }
}
