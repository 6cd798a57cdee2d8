// File: crates/pulse-svg/tests/render.rs
// Purpose: Structural render checks over the three dashboard views.

use pulse_core::series::{BenchmarkEntry, ForecastPoint, TrendDirection};
use pulse_core::{MetricColor, MetricValue, TrendIndicator};
use pulse_svg::{
    render_benchmarks, render_forecast, render_indicators, render_progress_ring, write_svg,
    RenderOptions, Theme, Variant,
};

fn forecast_fixture() -> Vec<ForecastPoint> {
    vec![
        ForecastPoint::try_new("W1", Some(100.0), 100.0, Some(95.0), Some(105.0)).unwrap(),
        ForecastPoint::try_new("W2", Some(110.0), 110.0, Some(104.0), Some(116.0)).unwrap(),
        ForecastPoint::try_new("W3", None, 118.0, Some(108.0), Some(128.0)).unwrap(),
        ForecastPoint::try_new("W4", None, 125.0, Some(110.0), Some(140.0)).unwrap(),
    ]
}

#[test]
fn forecast_document_carries_band_history_and_projection() {
    let doc = render_forecast(&forecast_fixture(), Some(150.0), &RenderOptions::default());

    assert!(doc.starts_with("<svg "), "standalone document");
    assert_eq!(doc.matches('Z').count(), 1, "one closed band polygon");
    assert!(doc.contains("stroke-dasharray=\"6 4\""), "dashed projection line");
    assert!(doc.contains("stroke-dasharray=\"4 4\""), "dashed target line");
    assert!(doc.contains(">W1<"), "x labels rendered");
}

#[test]
fn forecast_without_bounds_draws_no_band() {
    let points = vec![
        ForecastPoint::try_new("W1", Some(10.0), 10.0, None, None).unwrap(),
        ForecastPoint::try_new("W2", None, 12.0, None, None).unwrap(),
        ForecastPoint::try_new("W3", None, 13.0, None, None).unwrap(),
    ];
    let doc = render_forecast(&points, None, &RenderOptions::default());
    assert_eq!(doc.matches('Z').count(), 0, "no confidence interval is a valid state");
}

#[test]
fn empty_forecast_degrades_to_an_empty_surface() {
    let doc = render_forecast(&[], None, &RenderOptions::default());
    assert!(doc.starts_with("<svg "));
    assert!(!doc.contains("<path"), "no geometry for no data");
}

#[test]
fn mobile_variant_drops_the_band() {
    let opts = RenderOptions { variant: Variant::Mobile, ..Default::default() };
    let doc = render_forecast(&forecast_fixture(), None, &opts);
    assert_eq!(doc.matches('Z').count(), 0, "Mobile layout omits the band");
}

#[test]
fn benchmark_document_draws_three_bars_per_category() {
    let entries = vec![
        BenchmarkEntry::try_new("Revenue", 80.0, 60.0, 90.0, 82.0, TrendDirection::Up, 5.0)
            .unwrap(),
        BenchmarkEntry::try_new("Bookings", 40.0, 45.0, 70.0, 48.0, TrendDirection::Down, -2.0)
            .unwrap(),
    ];
    let doc = render_benchmarks(&entries, &RenderOptions::default());
    // Background rect plus 3 bars per category.
    assert_eq!(doc.matches("<rect").count(), 1 + 3 * entries.len());
    assert!(doc.contains(">Revenue<"));
    assert!(doc.contains("P82 high"), "percentile badge with tier label");
}

#[test]
fn ring_sweep_scales_with_progress() {
    let opts = RenderOptions::default();
    let half = render_progress_ring(100.0, 200.0, "monthly goal", &opts);
    assert!(half.contains(">50%<"));
    assert!(half.contains(" A "), "sweep arc present");

    let none = render_progress_ring(0.0, 200.0, "monthly goal", &opts);
    assert!(none.contains(">0%<"));
    assert!(!none.contains(" A "), "zero progress draws no arc");
}

#[test]
fn indicator_coloring_follows_is_positive_not_the_sign() {
    // A falling cancellation rate is a favorable move; the tile must trust
    // the supplied flag instead of re-deriving it from the percentage.
    let tiles = vec![TrendIndicator {
        label: "Cancellation rate".to_string(),
        value: MetricValue::Text("2.1%".to_string()),
        percentage: -0.8,
        is_positive: true,
        color: MetricColor::Warning,
    }];
    let theme = Theme::dark();
    let doc = render_indicators(&tiles, &RenderOptions::default());
    assert!(doc.contains(">Cancellation rate<"));
    assert!(doc.contains("-0.8%"), "movement keeps its real sign");
    let movement_line = doc.lines().find(|l| l.contains("-0.8%")).unwrap();
    assert!(
        movement_line.contains(theme.bar_top),
        "favorable color despite the negative percentage"
    );
}

#[test]
fn variant_lookup_is_total_and_sane() {
    for v in [Variant::Default, Variant::Compact, Variant::Detailed, Variant::Mobile, Variant::List]
    {
        let spec = v.spec();
        assert!(spec.x_ticks >= 2);
        assert!(spec.y_ticks >= 2);
        let opts = RenderOptions { variant: v, theme: Theme::light(), ..Default::default() };
        assert!(spec.insets.hsum() < opts.width as u32);
        assert!(spec.insets.vsum() < opts.height as u32);
        assert!(opts.plot_rect().is_drawable(), "default surface fits {v:?} insets");
    }
}

#[test]
fn write_svg_creates_parents_and_persists() {
    let doc = render_progress_ring(75.0, 100.0, "quarter goal", &RenderOptions::default());
    let out = std::path::PathBuf::from("target/test_out/ring.svg");
    write_svg(&out, &doc).expect("write should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");
}
