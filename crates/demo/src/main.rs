// File: crates/demo/src/main.rs
// Summary: Demo loads a daily stats CSV (or synthesizes a month) and renders one PNG per metric.

use anyhow::{Context, Result};
use chart_engine::{theme, Metric, Period, RenderOptions, Sample, TrendChart};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to a synthetic series
    let samples = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(raw);
            println!("Using input file: {}", path.display());
            load_stats_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            println!(
                "No CSV given; synthesizing a {}-day series",
                Period::Month.days()
            );
            synth_series(Period::Month)
        }
    };
    println!("Loaded {} samples", samples.len());

    if samples.is_empty() {
        anyhow::bail!("no samples loaded — check headers/delimiter.");
    }

    let theme_name = std::env::args().nth(2).unwrap_or_else(|| "dark".to_string());

    for metric in Metric::ALL {
        let mut opts = RenderOptions::default();
        opts.theme = theme::find(&theme_name);
        let mut chart = TrendChart::new(metric, opts);
        chart.set_width(900.0);
        chart.set_samples(samples.clone());

        let out = out_name(metric);
        chart.render_to_png(&out)?;
        println!("Wrote {}", out.display());
    }

    Ok(())
}

/// Produce output file name like target/out/chart_<metric>.png
fn out_name(metric: Metric) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{}.png", metric.label().to_lowercase()));
    out
}

/// Load a daily stats CSV into samples. Expected columns (case-insensitive,
/// a few aliases accepted): date, views, earnings, submissions.
fn load_stats_csv(path: &Path) -> Result<Vec<Sample>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    // Inspect headers (log them)
    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    println!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        for (i, h) in headers.iter().enumerate() {
            for want in names {
                if h == want {
                    return Some(i);
                }
            }
        }
        None
    };

    let i_date = idx(&["date", "day", "datetime"]).context("no date column")?;
    let i_views = idx(&["views", "view_count", "plays"]);
    let i_earnings = idx(&["earnings", "revenue", "payout"]);
    let i_submissions = idx(&["submissions", "uploads", "posts"]);

    if i_views.is_none() || i_earnings.is_none() || i_submissions.is_none() {
        println!("Warning: Could not find one of views/earnings/submissions columns.");
    }

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let parse_u = |i: Option<usize>| -> u64 {
            i.and_then(|ix| rec.get(ix))
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(0)
        };
        let parse_f = |i: Option<usize>| -> f64 {
            i.and_then(|ix| rec.get(ix))
                .and_then(|s| s.trim().parse::<f64>().ok())
                .unwrap_or(0.0)
        };

        // ISO-8601 calendar dates, the stats API wire form
        let Some(date) = rec.get(i_date).and_then(|s| s.trim().parse::<NaiveDate>().ok()) else {
            continue;
        };
        out.push(Sample::new(
            date,
            parse_u(i_views),
            parse_f(i_earnings),
            parse_u(i_submissions),
        ));
    }
    out.sort_by_key(|s| s.date);
    Ok(out)
}

/// Deterministic synthetic series for running the demo without data.
fn synth_series(period: Period) -> Vec<Sample> {
    let start = NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date");
    (0..period.days())
        .map(|i| {
            let wave = ((i as f64) * 0.45).sin() * 0.5 + 0.5;
            let views = (1_200.0 + wave * 4_500.0) as u64;
            let earnings = 8.0 + wave * 55.0;
            let submissions = (wave * 6.0) as u64;
            Sample::new(
                start + chrono::Days::new(i as u64),
                views,
                earnings,
                submissions,
            )
        })
        .collect()
}
