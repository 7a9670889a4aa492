use approx::assert_relative_eq;
use pma_feasibility::{
    engine::{calculate_irr, calculate_payback, npv},
    evaluate, format_currency, InputParameters, PaybackPeriod, Status,
};

fn spread_of_inputs() -> Vec<InputParameters> {
    vec![
        InputParameters::default(),
        InputParameters {
            use_terminal_value: false,
            discount_rate: 25.0,
            ..Default::default()
        },
        InputParameters {
            ramp_rates: vec![100.0; 5],
            pma_fee: 60_000.0,
            ..Default::default()
        },
        InputParameters {
            sell_price: 1000.0,
            ..Default::default()
        },
        InputParameters {
            ramp_rates: vec![],
            ..Default::default()
        },
        InputParameters {
            oem_unit_cost: -5000.0,
            ..Default::default()
        },
    ]
}

#[test]
fn reference_analysis_end_to_end() {
    let input = InputParameters::default();
    let result = evaluate(&input);

    assert_eq!(result.oem_investment, 11145.0);
    assert_eq!(result.labor_cost, 2400.0);
    assert_eq!(result.nre, 22945.0);
    assert_eq!(result.annual_margin, 22500.0);
    let expected = [-22945.0, 5175.0, 7875.0, 11925.0, 12375.0, 12375.0];
    for (flow, want) in result.cash_flows.iter().zip(expected) {
        assert_relative_eq!(*flow, want, max_relative = 1e-12);
    }
    assert_eq!(result.year5_cash_flow, result.cash_flows[5]);
    assert_relative_eq!(result.terminal_value, 86625.0, max_relative = 1e-12);

    assert_eq!(
        result.npv,
        npv(0.10, &result.cash_flows, Some(result.terminal_value))
    );
    assert_relative_eq!(result.npv, 67150.7414, epsilon = 1e-3);

    let irr = result.irr.expect("reference analysis has an IRR");
    assert_relative_eq!(irr, 0.27626, epsilon = 1e-4);

    match result.payback_period {
        PaybackPeriod::Years(years) => {
            assert_relative_eq!(years, 2.0 + 9895.0 / 11925.0, epsilon = 1e-9)
        }
        other => panic!("expected payback, got {:?}", other),
    }

    assert_eq!(result.pass_npv, result.npv >= 0.0);
    assert_eq!(result.pass_irr, irr >= 0.20);
    assert_eq!(result.pass_pbp, result.payback_value() <= 4.3);
    assert_eq!(result.pass_count, 3);
    assert_eq!(result.status, Status::Green);
}

#[test]
fn cash_flows_always_six_with_negative_nre_first() {
    for input in spread_of_inputs() {
        let result = evaluate(&input);
        assert_eq!(result.cash_flows.len(), 6);
        assert_eq!(result.cash_flows[0], -result.nre);
    }
}

#[test]
fn status_tracks_pass_count() {
    for input in spread_of_inputs() {
        let result = evaluate(&input);
        let count = [result.pass_npv, result.pass_irr, result.pass_pbp]
            .iter()
            .filter(|&&p| p)
            .count() as u8;
        assert_eq!(result.pass_count, count);

        let expected = match count {
            3 => Status::Green,
            2 => Status::Yellow,
            _ => Status::Red,
        };
        assert_eq!(result.status, expected);
    }
}

#[test]
fn npv_at_zero_rate_is_undiscounted_sum() {
    let input = InputParameters {
        discount_rate: 0.0,
        ..Default::default()
    };
    let result = evaluate(&input);
    let sum: f64 = result.cash_flows.iter().sum();
    assert_relative_eq!(result.npv, sum + result.terminal_value);

    let without_tv = evaluate(&InputParameters {
        use_terminal_value: false,
        ..input
    });
    assert_relative_eq!(without_tv.npv, sum);
}

#[test]
fn irr_is_root_of_cash_flow_npv() {
    for input in spread_of_inputs() {
        let result = evaluate(&input);
        if let Some(irr) = result.irr {
            assert!(
                npv(irr, &result.cash_flows, None).abs() < 1e-6,
                "irr {} not a root for {:?}",
                irr,
                result.cash_flows
            );
        }
    }
}

#[test]
fn raising_a_cash_flow_never_lengthens_payback() {
    let base = [-22945.0, 5175.0, 7875.0, 11925.0, 12375.0, 12375.0];
    let base_years = calculate_payback(&base).as_f64();

    for year in 1..base.len() {
        for bump in [1.0, 500.0, 10_000.0] {
            let mut flows = base;
            flows[year] += bump;
            let years = calculate_payback(&flows).as_f64();
            assert!(
                years <= base_years,
                "bumping year {} by {} moved payback {} -> {}",
                year,
                bump,
                base_years,
                years
            );
        }
    }
}

#[test]
fn zero_nre_has_undefined_payback() {
    let input = InputParameters {
        oem_unit_cost: 0.0,
        materials_inspection_cost: 0.0,
        labor_hours: 0.0,
        pma_fee: 0.0,
        der_fee: 0.0,
        ..Default::default()
    };
    let result = evaluate(&input);
    assert_eq!(result.nre, 0.0);
    assert!(result.payback_value().is_nan());
}

#[test]
fn slow_ramp_never_pays_back() {
    let input = InputParameters {
        ramp_rates: vec![5.0; 5],
        ..Default::default()
    };
    let result = evaluate(&input);
    assert_eq!(result.payback_value(), f64::INFINITY);
    assert!(!result.pass_pbp);
}

#[test]
fn all_negative_flows_have_no_irr() {
    assert_eq!(calculate_irr(&[-100.0, -10.0, -10.0, 0.0, 0.0, 0.0]), None);

    let input = InputParameters {
        sell_price: 1000.0, // below unit cost
        ..Default::default()
    };
    let result = evaluate(&input);
    assert_eq!(result.irr, None);
    assert!(result.irr_value().is_nan());
    assert!(!result.pass_irr);
}

#[test]
fn infinite_ramp_rate_has_no_irr() {
    let input = InputParameters {
        ramp_rates: vec![f64::INFINITY, 35.0, 53.0, 55.0, 55.0],
        ..Default::default()
    };
    let result = evaluate(&input);
    assert_eq!(result.cash_flows[1], f64::INFINITY);
    assert_eq!(result.irr, None);
    assert!(!result.pass_irr);
}

#[test]
fn discount_rate_of_minus_100_percent_propagates() {
    let input = InputParameters {
        discount_rate: -100.0,
        ..Default::default()
    };
    let result = evaluate(&input);
    assert!(!result.npv.is_finite());
    assert_eq!(format_currency(result.npv), "—");
}

#[test]
fn evaluate_is_deterministic() {
    for input in spread_of_inputs() {
        let first = evaluate(&input);
        let second = evaluate(&input);
        assert_eq!(first.npv.to_bits(), second.npv.to_bits());
        assert_eq!(
            first.irr.map(f64::to_bits),
            second.irr.map(f64::to_bits)
        );
        assert_eq!(
            first.payback_value().to_bits(),
            second.payback_value().to_bits()
        );
        for (a, b) in first.cash_flows.iter().zip(&second.cash_flows) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
        assert_eq!(first.status, second.status);
    }
}

#[test]
fn currency_formatting_contract() {
    assert_eq!(format_currency(f64::NAN), "—");
    assert_eq!(format_currency(1234.5), "$1,234.50");
}
