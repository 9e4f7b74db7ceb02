// File: crates/chart-engine/tests/curve.rs
// Purpose: Validate curve geometry: anchor mapping, midpoint rule, edge cases.

use chart_engine::curve::CurveGeometry;
use chart_engine::sample::{Metric, Sample};
use chrono::NaiveDate;

fn series(values: &[f64]) -> Vec<Sample> {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let date = start + chrono::Days::new(i as u64);
            Sample::new(date, v as u64, v, v as u64)
        })
        .collect()
}

#[test]
fn anchor_count_matches_series_and_x_spans_width() {
    let samples = series(&[10.0, 40.0, 25.0, 60.0, 5.0, 80.0, 33.0, 12.0]);
    let geo = CurveGeometry::build(&samples, Metric::Views, 800.0, 240.0, 100.0);

    assert_eq!(geo.anchors.len(), samples.len());
    assert_eq!(geo.segments.len(), samples.len() - 1);

    assert_eq!(geo.anchors[0].x, 0.0);
    assert_eq!(geo.anchors.last().unwrap().x, 800.0);
    for pair in geo.anchors.windows(2) {
        assert!(pair[0].x <= pair[1].x, "x must never decrease");
    }
}

#[test]
fn y_axis_is_inverted() {
    let samples = series(&[0.0, 100.0]);
    let geo = CurveGeometry::build(&samples, Metric::Earnings, 100.0, 240.0, 100.0);
    // zero sits on the baseline, the maximum at the top
    assert_eq!(geo.anchors[0].y, 240.0);
    assert_eq!(geo.anchors[1].y, 0.0);
}

#[test]
fn control_points_sit_at_the_horizontal_midpoint() {
    let samples = series(&[20.0, 80.0, 50.0]);
    let geo = CurveGeometry::build(&samples, Metric::Views, 200.0, 100.0, 100.0);

    for (seg, pair) in geo.segments.iter().zip(geo.anchors.windows(2)) {
        let (p0, p1) = (pair[0], pair[1]);
        let mx = (p0.x + p1.x) * 0.5;
        assert_eq!(seg.c1.x, mx);
        assert_eq!(seg.c2.x, mx);
        assert_eq!(seg.c1.y, p0.y);
        assert_eq!(seg.c2.y, p1.y);
        assert_eq!(seg.to, p1);
    }
}

#[test]
fn empty_series_produces_no_geometry() {
    let geo = CurveGeometry::build(&[], Metric::Views, 800.0, 240.0, 100.0);
    assert!(geo.anchors.is_empty());
    assert!(geo.segments.is_empty());
    assert!(geo.baseline_corners(240.0).is_none());
}

#[test]
fn single_sample_yields_one_anchor_and_no_segment() {
    let samples = series(&[42.0]);
    let geo = CurveGeometry::build(&samples, Metric::Views, 800.0, 240.0, 100.0);
    assert_eq!(geo.anchors.len(), 1);
    assert!(geo.segments.is_empty());
    assert_eq!(geo.anchors[0].x, 0.0);
}

#[test]
fn all_zero_series_is_flat_along_the_baseline() {
    let samples = series(&[0.0; 8]);
    let geo = CurveGeometry::build(&samples, Metric::Submissions, 800.0, 240.0, 100.0);
    for p in &geo.anchors {
        assert_eq!(p.y, 240.0);
    }
}

#[test]
fn hostile_values_contribute_zero_instead_of_crashing() {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
    let samples = vec![
        Sample::new(start, 0, f64::NAN, 0),
        Sample::new(start + chrono::Days::new(1), 0, f64::INFINITY, 0),
        Sample::new(start + chrono::Days::new(2), 0, -12.0, 0),
    ];
    let geo = CurveGeometry::build(&samples, Metric::Earnings, 300.0, 100.0, 100.0);
    for p in &geo.anchors {
        assert!(p.y.is_finite());
        assert_eq!(p.y, 100.0);
    }
}

#[test]
fn area_outline_extends_to_the_baseline_corners() {
    let samples = series(&[10.0, 20.0, 30.0]);
    let geo = CurveGeometry::build(&samples, Metric::Views, 600.0, 240.0, 100.0);
    let (last, first) = geo.baseline_corners(240.0).unwrap();
    assert_eq!(last.x, 600.0);
    assert_eq!(last.y, 240.0);
    assert_eq!(first.x, 0.0);
    assert_eq!(first.y, 240.0);
}
