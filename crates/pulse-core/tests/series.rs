// File: crates/pulse-core/tests/series.rs
// Purpose: Data-model constructor invariants and forecast partition helpers.

use pulse_core::series::{
    has_full_bounds, historical_count, secondary_values, values, BenchmarkEntry, ForecastPoint,
    SeriesError, TimeSeriesPoint, TrendDirection,
};

#[test]
fn forecast_bounds_must_bracket_the_forecast() {
    assert_eq!(
        ForecastPoint::try_new("W1", None, 100.0, Some(110.0), Some(120.0)),
        Err(SeriesError::LowerAboveForecast)
    );
    assert_eq!(
        ForecastPoint::try_new("W1", None, 100.0, Some(80.0), Some(90.0)),
        Err(SeriesError::UpperBelowForecast)
    );
    assert!(ForecastPoint::try_new("W1", None, 100.0, Some(80.0), Some(120.0)).is_ok());
    assert!(ForecastPoint::try_new("W1", Some(99.0), 100.0, None, None).is_ok());
}

#[test]
fn historical_partition_follows_actual() {
    let points = vec![
        ForecastPoint::try_new("W1", Some(90.0), 90.0, None, None).unwrap(),
        ForecastPoint::try_new("W2", Some(95.0), 95.0, None, None).unwrap(),
        ForecastPoint::try_new("W3", None, 101.0, Some(92.0), Some(110.0)).unwrap(),
    ];
    assert!(points[0].is_historical());
    assert!(!points[2].is_historical());
    assert_eq!(historical_count(&points), 2);
    assert!(!has_full_bounds(&points), "partial bounds mean no band");
}

#[test]
fn full_bounds_enable_the_band() {
    let points = vec![
        ForecastPoint::try_new("W1", None, 100.0, Some(90.0), Some(110.0)).unwrap(),
        ForecastPoint::try_new("W2", None, 104.0, Some(93.0), Some(115.0)).unwrap(),
    ];
    assert!(has_full_bounds(&points));
    assert!(!has_full_bounds(&[]));
}

#[test]
fn value_accessors_keep_order_and_skip_missing_secondaries() {
    let pts = vec![
        TimeSeriesPoint::new("Mon", 3.0).with_secondary(1.0),
        TimeSeriesPoint::new("Tue", 1.0),
        TimeSeriesPoint::new("Wed", 2.0).with_secondary(4.0),
    ];
    assert_eq!(values(&pts), vec![3.0, 1.0, 2.0]);
    assert_eq!(secondary_values(&pts), vec![1.0, 4.0]);
}

#[test]
fn benchmark_percentile_is_range_checked() {
    let bad = BenchmarkEntry::try_new("Rev", 1.0, 1.0, 1.0, 101.0, TrendDirection::Stable, 0.0);
    assert_eq!(bad, Err(SeriesError::PercentileOutOfRange));
    let ok = BenchmarkEntry::try_new("Rev", 1.0, 1.0, 1.0, 55.0, TrendDirection::Up, 1.5);
    assert!(ok.is_ok());
}
