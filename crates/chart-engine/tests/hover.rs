// File: crates/chart-engine/tests/hover.rs
// Purpose: Validate pointer-to-sample mapping: rounding policy, monotonicity, clamping.

use chart_engine::hover::{hover_index, HoverState};

#[test]
fn midpoint_of_eight_samples_rounds_half_up() {
    // x = W/2 over 8 samples: 0.5 * 7 = 3.5, round-half-up -> 4
    assert_eq!(hover_index(400.0, 800.0, 8), Some(4));
    // reproducible under repetition
    for _ in 0..10 {
        assert_eq!(hover_index(400.0, 800.0, 8), Some(4));
    }
}

#[test]
fn monotonic_in_pointer_x() {
    let mut last = 0usize;
    for px in 0..=800 {
        let idx = hover_index(px as f32, 800.0, 8).unwrap();
        assert!(idx >= last, "index decreased at x={px}");
        assert!(idx <= 7);
        last = idx;
    }
    assert_eq!(last, 7);
}

#[test]
fn clamps_outside_the_plot_area() {
    assert_eq!(hover_index(-50.0, 800.0, 8), Some(0));
    assert_eq!(hover_index(5_000.0, 800.0, 8), Some(7));
}

#[test]
fn edges_map_to_first_and_last_sample() {
    assert_eq!(hover_index(0.0, 800.0, 8), Some(0));
    assert_eq!(hover_index(800.0, 800.0, 8), Some(7));
}

#[test]
fn degenerate_inputs_yield_no_index() {
    assert_eq!(hover_index(100.0, 800.0, 0), None);
    assert_eq!(hover_index(100.0, 0.0, 8), None);
    assert_eq!(hover_index(100.0, -10.0, 8), None);
    assert_eq!(hover_index(f32::NAN, 800.0, 8), None);
}

#[test]
fn single_sample_always_maps_to_index_zero() {
    assert_eq!(hover_index(0.0, 800.0, 1), Some(0));
    assert_eq!(hover_index(799.0, 800.0, 1), Some(0));
}

#[test]
fn hover_state_reports_its_index() {
    assert_eq!(HoverState::Idle.index(), None);
    assert_eq!(HoverState::Hovering(3).index(), Some(3));
    assert_eq!(HoverState::default(), HoverState::Idle);
}
