// File: crates/chart-engine/src/hover.rs
// Summary: Pointer-to-sample mapping and hover state.

/// Hover target, or none. Pointer-leave and any series/metric/period
/// change force `Idle`; transitions are synchronous, nothing is queued.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Idle,
    Hovering(usize),
}

impl HoverState {
    pub fn index(&self) -> Option<usize> {
        match *self {
            HoverState::Idle => None,
            HoverState::Hovering(i) => Some(i),
        }
    }
}

/// Map a pointer x position (pixels from the plot area's left edge) to the
/// nearest sample index.
///
/// Rounding policy: round-half-up (`f64::round` on a non-negative
/// operand), so a tie at .5 selects the higher index. Stable and pure:
/// identical `(x, width, len)` always yields the same index; increasing
/// `x` never decreases it. The result is clamped to `[0, len - 1]`.
pub fn hover_index(x: f32, width: f32, len: usize) -> Option<usize> {
    if len == 0 || !(width > 0.0) || !x.is_finite() {
        return None;
    }
    if len == 1 {
        return Some(0);
    }
    let t = (x / width) as f64;
    let raw = (t * (len - 1) as f64).round();
    Some(raw.clamp(0.0, (len - 1) as f64) as usize)
}
