// File: crates/chart-engine/src/theme.rs
// Summary: Light/Dark theming for dashboard chart colors.

use skia_safe as skia;

use crate::sample::Metric;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_label: skia::Color,
    pub guide: skia::Color,
    pub marker_ring: skia::Color,
    pub tooltip_bg: skia::Color,
    pub tooltip_text: skia::Color,
    pub placeholder: skia::Color,
    pub views: skia::Color,
    pub earnings: skia::Color,
    pub submissions: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_label: skia::Color::from_argb(255, 150, 150, 160),
            guide: skia::Color::from_argb(255, 110, 110, 125),
            marker_ring: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_bg: skia::Color::from_argb(240, 32, 32, 38),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
            placeholder: skia::Color::from_argb(255, 120, 120, 130),
            views: skia::Color::from_argb(255, 64, 160, 255),
            earnings: skia::Color::from_argb(255, 40, 200, 120),
            submissions: skia::Color::from_argb(255, 170, 120, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_label: skia::Color::from_argb(255, 100, 100, 110),
            guide: skia::Color::from_argb(255, 160, 160, 170),
            marker_ring: skia::Color::from_argb(255, 255, 255, 255),
            tooltip_bg: skia::Color::from_argb(240, 30, 30, 36),
            tooltip_text: skia::Color::from_argb(255, 245, 245, 250),
            placeholder: skia::Color::from_argb(255, 140, 140, 150),
            views: skia::Color::from_argb(255, 32, 120, 200),
            earnings: skia::Color::from_argb(255, 20, 160, 90),
            submissions: skia::Color::from_argb(255, 130, 80, 220),
        }
    }

    /// Stroke/fill color for the selected metric.
    pub fn metric_color(&self, metric: Metric) -> skia::Color {
        match metric {
            Metric::Views => self.views,
            Metric::Earnings => self.earnings,
            Metric::Submissions => self.submissions,
        }
    }
}

/// Return the list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
