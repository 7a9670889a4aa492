//! Internal Rate of Return (IRR) calculation
//!
//! Bisection on the cash-flow NPV over a fixed bracket. Terminal value never
//! takes part.

use super::npv::npv;
use log::debug;

const LOWER_BOUND: f64 = -0.99;
const UPPER_BOUND: f64 = 10.0;
/// Used once if the first bracket shows no sign change
const WIDENED_UPPER_BOUND: f64 = 100.0;
const TOLERANCE: f64 = 1e-6;
const MAX_ITERATIONS: usize = 200;

/// Calculate the IRR of yearly cash flows (index 0 = today).
///
/// # Returns
/// * `Option<f64>` - Per-period IRR as a decimal (0.25 for 25%), or None if no
///   sign change can be bracketed in [-0.99, 100]
pub fn calculate_irr(cashflows: &[f64]) -> Option<f64> {
    let f = |rate: f64| npv(rate, cashflows, None);

    let mut low = LOWER_BOUND;
    let mut high = UPPER_BOUND;
    let mut npv_low = f(low);
    let mut npv_high = f(high);

    if !npv_low.is_finite() || !npv_high.is_finite() {
        debug!("IRR: non-finite NPV at bracket ends ({}, {})", npv_low, npv_high);
        return None;
    }

    if npv_low * npv_high > 0.0 {
        high = WIDENED_UPPER_BOUND;
        npv_high = f(high);
        debug!("IRR: no sign change in [{}, {}], widening to {}", low, UPPER_BOUND, high);
        if npv_low * npv_high > 0.0 {
            debug!("IRR: no sign change in [{}, {}], no solution", low, high);
            return None;
        }
    }

    for _ in 0..MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let npv_mid = f(mid);

        if npv_mid.abs() < TOLERANCE {
            return Some(mid);
        }

        if npv_low * npv_mid <= 0.0 {
            high = mid;
            npv_high = npv_mid;
        } else {
            low = mid;
            npv_low = npv_mid;
        }
    }

    // Bracket has collapsed as far as f64 allows; its midpoint is the best estimate
    debug!("IRR: iteration limit reached, residual at high end {}", npv_high);
    Some((low + high) / 2.0)
}
