// File: crates/chart-engine/tests/sample.rs
// Purpose: Validate sample construction, metric access, and extremes.

use chart_engine::sample::{metric_max, plot_value, Metric, Period, Sample};
use chrono::NaiveDate;

#[test]
fn from_iso_parses_calendar_dates() {
    let s = Sample::from_iso("2025-06-03", 1200, 45.5, 3).unwrap();
    assert_eq!(s.date, NaiveDate::from_ymd_opt(2025, 6, 3).unwrap());
    assert_eq!(s.views, 1200);
    assert_eq!(s.earnings, 45.5);
    assert_eq!(s.submissions, 3);

    assert!(Sample::from_iso("June 3rd", 0, 0.0, 0).is_err());
    assert!(Sample::from_iso("2025-13-40", 0, 0.0, 0).is_err());
}

#[test]
fn metric_selects_its_field() {
    let s = Sample::from_iso("2025-06-03", 1200, 45.5, 3).unwrap();
    assert_eq!(Metric::Views.value_of(&s), 1200.0);
    assert_eq!(Metric::Earnings.value_of(&s), 45.5);
    assert_eq!(Metric::Submissions.value_of(&s), 3.0);
}

#[test]
fn metric_cycle_visits_all_and_wraps() {
    let mut m = Metric::Views;
    for want in [Metric::Earnings, Metric::Submissions, Metric::Views] {
        m = m.next();
        assert_eq!(m, want);
    }
}

#[test]
fn metric_max_ignores_hostile_values() {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let samples = vec![
        Sample::new(start, 10, f64::NAN, 1),
        Sample::new(start + chrono::Days::new(1), 250, -3.0, 2),
        Sample::new(start + chrono::Days::new(2), 40, 12.5, 0),
    ];
    assert_eq!(metric_max(&samples, Metric::Views), 250.0);
    assert_eq!(metric_max(&samples, Metric::Earnings), 12.5);
    assert_eq!(metric_max(&samples, Metric::Submissions), 2.0);
    assert_eq!(metric_max(&[], Metric::Views), 0.0);
}

#[test]
fn plot_value_clamps_to_the_plottable_domain() {
    assert_eq!(plot_value(42.0), 42.0);
    assert_eq!(plot_value(0.0), 0.0);
    assert_eq!(plot_value(-1.0), 0.0);
    assert_eq!(plot_value(f64::NAN), 0.0);
    assert_eq!(plot_value(f64::INFINITY), 0.0);
}

#[test]
fn periods_cover_the_dashboard_windows() {
    assert_eq!(Period::Week.days(), 7);
    assert_eq!(Period::Month.days(), 28);
}
