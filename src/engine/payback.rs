//! Payback period: time until cumulative cash flow recovers the up-front investment

use serde::{Deserialize, Serialize};

/// Outcome of a payback search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "years", rename_all = "snake_case")]
pub enum PaybackPeriod {
    /// Recovered after this many (possibly fractional) years
    Years(f64),
    /// Cumulative cash flow never reaches the investment within the horizon
    NotWithinHorizon,
    /// No positive investment to recover
    Undefined,
}

impl PaybackPeriod {
    /// Numeric encoding: +inf for no payback, NaN for undefined
    pub fn as_f64(&self) -> f64 {
        match *self {
            PaybackPeriod::Years(years) => years,
            PaybackPeriod::NotWithinHorizon => f64::INFINITY,
            PaybackPeriod::Undefined => f64::NAN,
        }
    }

    pub fn years(&self) -> Option<f64> {
        match *self {
            PaybackPeriod::Years(years) => Some(years),
            _ => None,
        }
    }
}

/// Find the payback period of `cashflows`, where index 0 is the (negative)
/// investment. The breakeven year is interpolated linearly.
pub fn calculate_payback(cashflows: &[f64]) -> PaybackPeriod {
    let Some((&first, rest)) = cashflows.split_first() else {
        return PaybackPeriod::Undefined;
    };

    let initial = -first;
    // Also catches a NaN investment
    if !(initial > 0.0) {
        return PaybackPeriod::Undefined;
    }

    let mut cumulative = 0.0;
    for (idx, &cf) in rest.iter().enumerate() {
        let before = cumulative;
        cumulative += cf;

        if cumulative >= initial {
            // A non-positive flow can't be the one that crosses; count the whole year
            let fraction = if cf > 0.0 { (initial - before) / cf } else { 1.0 };
            return PaybackPeriod::Years(idx as f64 + fraction);
        }
    }

    PaybackPeriod::NotWithinHorizon
}
