// File: crates/chart-engine/src/sample.rs
// Summary: Daily dashboard sample model, metric selector, and trailing periods.

use chrono::NaiveDate;

use crate::format;

/// One aggregated data point for a single calendar day.
/// Immutable once produced by the stats source; the engine never mutates a
/// series, a refetch replaces it whole.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub date: NaiveDate,
    pub views: u64,
    pub earnings: f64,
    pub submissions: u64,
}

impl Sample {
    pub fn new(date: NaiveDate, views: u64, earnings: f64, submissions: u64) -> Self {
        Self { date, views, earnings, submissions }
    }

    /// Construct from the ISO-8601 date form the stats API exchanges.
    pub fn from_iso(
        date: &str,
        views: u64,
        earnings: f64,
        submissions: u64,
    ) -> Result<Self, chrono::ParseError> {
        Ok(Self { date: date.parse()?, views, earnings, submissions })
    }
}

/// Which sample field is plotted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Views,
    Earnings,
    Submissions,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Views, Metric::Earnings, Metric::Submissions];

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Views => "Views",
            Metric::Earnings => "Earnings",
            Metric::Submissions => "Submissions",
        }
    }

    /// Value of this metric for one sample.
    pub fn value_of(&self, sample: &Sample) -> f64 {
        match self {
            Metric::Views => sample.views as f64,
            Metric::Earnings => sample.earnings,
            Metric::Submissions => sample.submissions as f64,
        }
    }

    /// Human-readable form of an axis or tooltip value. Never panics,
    /// whatever the input (see `format`).
    pub fn format(&self, value: f64) -> String {
        match self {
            Metric::Earnings => format::currency(value),
            Metric::Views | Metric::Submissions => format::count(value),
        }
    }

    /// The next metric in display order (used by hosts that cycle panels).
    pub fn next(&self) -> Metric {
        match self {
            Metric::Views => Metric::Earnings,
            Metric::Earnings => Metric::Submissions,
            Metric::Submissions => Metric::Views,
        }
    }
}

/// Trailing window selectable on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
}

impl Period {
    pub const fn days(&self) -> usize {
        match self {
            Period::Week => 7,
            Period::Month => 28,
        }
    }
}

/// Clamp a raw sample value to the plottable domain: non-finite or
/// negative values contribute nothing to geometry.
pub fn plot_value(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// Largest plottable value of `metric` across `samples`; 0.0 when the
/// series is empty or all zero.
pub fn metric_max(samples: &[Sample], metric: Metric) -> f64 {
    samples
        .iter()
        .map(|s| plot_value(metric.value_of(s)))
        .fold(0.0, f64::max)
}
