// File: crates/chart-engine/src/lib.rs
// Summary: Engine library entry point; exports the dashboard chart API.

pub mod chart;
pub mod curve;
pub mod format;
pub mod grid;
pub mod hover;
pub mod observer;
pub mod sample;
pub mod scale;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::{Frame, RenderError, RenderOptions, TrendChart};
pub use curve::{CubicSegment, CurveGeometry, Point};
pub use hover::{hover_index, HoverState};
pub use observer::{ContainerObserver, WidthSubscription};
pub use sample::{metric_max, Metric, Period, Sample};
pub use scale::{gridline_values, nice_max};
pub use text::{Face, TextShaper};
pub use theme::Theme;
pub use types::Insets;
