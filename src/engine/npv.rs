//! Net present value of a yearly cash-flow stream

fn compound(rate: f64, period: usize) -> f64 {
    (1.0 + rate).powi(period as i32)
}

/// NPV of `cash_flows` where index 0 is undiscounted (today).
///
/// A finite `terminal_value` is discounted over the same number of periods as the
/// last cash flow. Nothing is guarded: a rate of -1 yields infinite terms that
/// propagate into the result.
pub fn npv(rate: f64, cash_flows: &[f64], terminal_value: Option<f64>) -> f64 {
    let Some((&initial, rest)) = cash_flows.split_first() else {
        return terminal_value.filter(|tv| tv.is_finite()).unwrap_or(0.0);
    };

    let mut total = initial;
    for (i, cf) in rest.iter().enumerate() {
        total += cf / compound(rate, i + 1);
    }

    if let Some(tv) = terminal_value.filter(|tv| tv.is_finite()) {
        total += tv / compound(rate, cash_flows.len() - 1);
    }

    total
}
