// File: crates/demo/src/main.rs
// Summary: Demo loads a revenue series CSV and benchmark JSON, derives stats,
//          runs the counter animation, and renders the dashboard SVGs.

use anyhow::{Context, Result};
use pulse_core::series::TimeSeriesPoint;
use pulse_core::{
    goal_progress, growth_rate, nearest_index, summarize, Animator, ForecastPoint, MetricColor,
    MetricValue, PeriodComparison, TrendIndicator, DEFAULT_DURATION_MS,
};
use pulse_svg::{
    render_benchmarks, render_forecast, render_indicators, render_progress_ring, theme, write_svg,
    RenderOptions,
};
use std::path::{Path, PathBuf};
use tracing::info;

/// Reference line drawn on the forecast chart (monthly revenue goal).
const MONTHLY_TARGET: f64 = 4200.0;
/// Goal the progress ring fills toward; matched to the sample data scale.
const ANNUAL_TARGET: f64 = 45_000.0;

/// Synthetic frame step for the headless animation loop (≈60 fps).
const FRAME_MS: f64 = 16.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let series_path = std::env::args().nth(1).unwrap_or_else(|| "data/revenue.csv".to_string());
    let bench_path = std::env::args().nth(2).unwrap_or_else(|| "data/benchmarks.json".to_string());
    let theme_name = std::env::args().nth(3).unwrap_or_else(|| "dark".to_string());

    let points = load_series_csv(&resolve_path(&series_path)?)
        .with_context(|| format!("failed to load CSV '{series_path}'"))?;
    if points.is_empty() {
        anyhow::bail!("no rows loaded - check headers/delimiter.");
    }
    info!(rows = points.len(), "loaded revenue series");

    let benchmarks = load_benchmarks_json(&resolve_path(&bench_path)?)
        .with_context(|| format!("failed to load benchmarks '{bench_path}'"))?;
    info!(entries = benchmarks.len(), "loaded benchmark snapshot");

    // Derived statistics over the observed part of the series.
    let history: Vec<TimeSeriesPoint> = points
        .iter()
        .filter_map(|p| p.actual.map(|a| TimeSeriesPoint::new(p.label.clone(), a)))
        .collect();
    let summary = summarize(&history);
    info!(total = summary.total, mean = summary.mean, latest = summary.latest, "series summary");

    let cmp = if history.len() >= 2 {
        PeriodComparison::between(summary.latest, history[history.len() - 2].value)
    } else {
        PeriodComparison::between(summary.latest, summary.latest)
    };
    info!(
        delta = cmp.delta,
        growth_pct = cmp.growth_pct,
        direction = cmp.direction.as_str(),
        "period over period"
    );

    let progress = goal_progress(summary.total, ANNUAL_TARGET);
    info!(progress_pct = progress, target = ANNUAL_TARGET, "goal progress");

    // Headline counters count up with a staggered reveal; the loop drives a
    // synthetic frame clock, so the demo stays headless and deterministic.
    let mut anim = Animator::new();
    let ids = anim.spawn_staggered(
        0.0,
        &[summary.total, summary.latest, progress],
        DEFAULT_DURATION_MS,
        120.0,
    );
    for &id in &ids {
        anim.mark_visible(id);
    }
    let mut now = 0.0;
    let mut frames = 0u32;
    while anim.tick(now) {
        now += FRAME_MS;
        frames += 1;
    }
    info!(
        frames,
        total = anim.value(ids[0]).unwrap_or(0.0),
        latest = anim.value(ids[1]).unwrap_or(0.0),
        "counters settled"
    );

    // Simulated hover half way across the plot, snapped to a sample.
    let opts = RenderOptions { theme: theme::find(&theme_name), ..Default::default() };
    let plot = opts.plot_rect();
    if let Some(i) = nearest_index(plot.left + plot.width() / 2.0, plot.left, plot.width(), points.len())
    {
        info!(index = i, label = %points[i].label, "tooltip under mid-plot pointer");
    }

    let out_dir = PathBuf::from("target/out");

    let forecast_doc = render_forecast(&points, Some(MONTHLY_TARGET), &opts);
    let forecast_out = out_dir.join("forecast.svg");
    write_svg(&forecast_out, &forecast_doc)?;
    info!(path = %forecast_out.display(), "wrote forecast chart");

    let bench_doc = render_benchmarks(&benchmarks, &opts);
    let bench_out = out_dir.join("benchmarks.svg");
    write_svg(&bench_out, &bench_doc)?;
    info!(path = %bench_out.display(), "wrote benchmark comparison");

    let ring_doc = render_progress_ring(summary.total, ANNUAL_TARGET, "annual goal", &opts);
    let ring_out = out_dir.join("goal_ring.svg");
    write_svg(&ring_out, &ring_doc)?;
    info!(path = %ring_out.display(), "wrote goal ring");

    let tiles = vec![
        TrendIndicator {
            label: "Revenue".to_string(),
            value: MetricValue::Number(summary.latest),
            percentage: cmp.growth_pct,
            is_positive: cmp.growth_pct >= 0.0,
            color: MetricColor::Primary,
        },
        TrendIndicator {
            label: "Vs avg month".to_string(),
            value: MetricValue::Text(format!("{progress:.0}% of goal")),
            percentage: growth_rate(summary.latest, summary.mean),
            is_positive: summary.latest >= summary.mean,
            color: MetricColor::Success,
        },
    ];
    let tiles_doc = render_indicators(&tiles, &opts);
    let tiles_out = out_dir.join("indicators.svg");
    write_svg(&tiles_out, &tiles_doc)?;
    info!(path = %tiles_out.display(), "wrote indicator tiles");

    Ok(())
}

/// Resolve a data path against the current directory, falling back to the
/// crate's own directory so `cargo run` works from the workspace root.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let alt = Path::new(env!("CARGO_MANIFEST_DIR")).join(raw);
    if alt.exists() {
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load a revenue CSV into forecast points. Columns are matched by header
/// name: `label`, an observed `value`, and optional `forecast`/`lower`/
/// `upper` for the projected tail.
fn load_series_csv(path: &Path) -> Result<Vec<ForecastPoint>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_label = idx(&["label", "period", "date", "day"]);
    let i_value = idx(&["value", "actual", "revenue"]);
    let i_forecast = idx(&["forecast", "projected"]);
    let i_lower = idx(&["lower", "lower_bound", "lo"]);
    let i_upper = idx(&["upper", "upper_bound", "hi"]);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let get = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.parse::<f64>().ok())
        };

        let label = i_label
            .and_then(|ix| rec.get(ix))
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{row}"));
        let actual = get(i_value);
        let forecast = get(i_forecast).or(actual);
        let Some(forecast) = forecast else { continue };

        let point =
            ForecastPoint::try_new(label, actual, forecast, get(i_lower), get(i_upper))
                .map_err(|e| anyhow::anyhow!("row {row}: {e}"))?;
        out.push(point);
    }
    Ok(out)
}

fn load_benchmarks_json(path: &Path) -> Result<Vec<pulse_core::BenchmarkEntry>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let entries = serde_json::from_str(&raw).context("parsing benchmark entries")?;
    Ok(entries)
}
