// File: crates/chart-engine/tests/format.rs
// Purpose: Validate value formatting: abbreviation ladder and total safety.

use chart_engine::format::{count, currency};
use chart_engine::Metric;

#[test]
fn count_abbreviation_ladder() {
    assert_eq!(count(0.0), "0");
    assert_eq!(count(999.0), "999");
    assert_eq!(count(1_000.0), "1.0K");
    assert_eq!(count(1_500.0), "1.5K");
    assert_eq!(count(2_500_000.0), "2.5M");
    assert_eq!(count(9_900_000_000.0), "9.9B");
}

#[test]
fn currency_keeps_cents_below_one_thousand() {
    assert_eq!(currency(0.0), "$0.00");
    assert_eq!(currency(12.4), "$12.40");
    assert_eq!(currency(999.99), "$999.99");
    assert_eq!(currency(1_000.0), "$1.0K");
    assert_eq!(currency(3_700_000.0), "$3.7M");
}

#[test]
fn hostile_inputs_fall_back_instead_of_panicking() {
    assert_eq!(count(f64::NAN), "0");
    assert_eq!(count(f64::INFINITY), "0");
    assert_eq!(count(-42.0), "0");
    assert_eq!(currency(f64::NAN), "$0");
    assert_eq!(currency(f64::NEG_INFINITY), "$0");
    assert_eq!(currency(-0.01), "$0.00");

    // fractional and huge values format without surprises
    assert_eq!(count(0.4), "0");
    assert_eq!(count(1e18), format!("{:.1}B", 1e18 / 1e9));
}

#[test]
fn metric_routes_to_its_formatter() {
    assert_eq!(Metric::Views.format(1_500.0), "1.5K");
    assert_eq!(Metric::Submissions.format(12.0), "12");
    assert_eq!(Metric::Earnings.format(42.5), "$42.50");
}
