// File: crates/chart-engine/src/curve.rs
// Summary: Pixel-space curve geometry: anchors, cubic segments, area outline.

use crate::sample::{plot_value, Metric, Sample};

/// A point in plot-area pixel space (origin top-left, y grows downward).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// One cubic segment of the interpolated curve. Both control points sit at
/// the horizontal midpoint of the span; `c1` carries the start y, `c2` the
/// end y. The midpoint rule is the engine's visual contract: a deliberate
/// simplification, not a spline fit, and it cannot overshoot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicSegment {
    pub c1: Point,
    pub c2: Point,
    pub to: Point,
}

/// Derived curve geometry for one frame. Rebuilt from scratch on every
/// relevant input change; nothing is cached across frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CurveGeometry {
    pub anchors: Vec<Point>,
    pub segments: Vec<CubicSegment>,
}

impl CurveGeometry {
    /// Map `samples` onto a `width` x `height` plot area and build the
    /// interpolated path.
    ///
    /// Anchors follow `x_i = (i / (n-1)) * width` and an inverted y axis
    /// (zero at the bottom). A single sample yields one anchor at the left
    /// edge and no segments; callers render a marker instead of a line.
    pub fn build(
        samples: &[Sample],
        metric: Metric,
        width: f32,
        height: f32,
        nice_max: f64,
    ) -> Self {
        let n = samples.len();
        if n == 0 {
            return Self::default();
        }

        let y_of = |s: &Sample| -> f32 {
            let v = plot_value(metric.value_of(s));
            height - ((v / nice_max) as f32) * height
        };

        if n == 1 {
            let anchor = Point { x: 0.0, y: y_of(&samples[0]) };
            return Self { anchors: vec![anchor], segments: Vec::new() };
        }

        let anchors: Vec<Point> = samples
            .iter()
            .enumerate()
            .map(|(i, s)| Point {
                x: (i as f32 / (n - 1) as f32) * width,
                y: y_of(s),
            })
            .collect();

        let mut segments = Vec::with_capacity(n - 1);
        for pair in anchors.windows(2) {
            let (p0, p1) = (pair[0], pair[1]);
            let mx = (p0.x + p1.x) * 0.5;
            segments.push(CubicSegment {
                c1: Point { x: mx, y: p0.y },
                c2: Point { x: mx, y: p1.y },
                to: p1,
            });
        }
        Self { anchors, segments }
    }

    /// Corners that extend the curve into the closed area outline: down to
    /// the baseline at the last x, across to the baseline at the first x.
    pub fn baseline_corners(&self, height: f32) -> Option<(Point, Point)> {
        let first = self.anchors.first()?;
        let last = self.anchors.last()?;
        Some((
            Point { x: last.x, y: height },
            Point { x: first.x, y: height },
        ))
    }
}
