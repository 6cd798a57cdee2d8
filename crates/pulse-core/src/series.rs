// File: crates/pulse-core/src/series.rs
// Summary: Snapshot data model for metric series, forecasts, benchmarks, and indicators.
// Notes:
// - All types are immutable snapshots supplied by the data layer for one
//   render pass; nothing here is mutated or persisted by the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeriesError {
    #[error("lower bound above forecast")]
    LowerAboveForecast,
    #[error("upper bound below forecast")]
    UpperBelowForecast,
    #[error("percentile outside 0..=100")]
    PercentileOutOfRange,
}

/// A single observation in a chronological series (e.g. one day's revenue).
/// `label` is display-ready; sequence order is chronological order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<f64>,
}

impl TimeSeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, secondary: None }
    }

    pub fn with_secondary(mut self, secondary: f64) -> Self {
        self.secondary = Some(secondary);
        self
    }
}

/// Primary values of a series, in order.
pub fn values(points: &[TimeSeriesPoint]) -> Vec<f64> {
    points.iter().map(|p| p.value).collect()
}

/// Secondary values of a series, skipping points without one.
pub fn secondary_values(points: &[TimeSeriesPoint]) -> Vec<f64> {
    points.iter().filter_map(|p| p.secondary).collect()
}

/// One sample on a forecast chart. Points with `actual` set are historical;
/// points without are projected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
    pub forecast: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_bound: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

impl ForecastPoint {
    /// Try to construct a point enforcing the bound ordering invariant:
    /// lower_bound <= forecast <= upper_bound where bounds are present.
    pub fn try_new(
        label: impl Into<String>,
        actual: Option<f64>,
        forecast: f64,
        lower_bound: Option<f64>,
        upper_bound: Option<f64>,
    ) -> Result<Self, SeriesError> {
        if let Some(lo) = lower_bound {
            if lo > forecast { return Err(SeriesError::LowerAboveForecast); }
        }
        if let Some(hi) = upper_bound {
            if hi < forecast { return Err(SeriesError::UpperBelowForecast); }
        }
        Ok(Self { label: label.into(), actual, forecast, lower_bound, upper_bound, confidence: None })
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    /// True when this sample carries an observed value.
    pub fn is_historical(&self) -> bool { self.actual.is_some() }
}

/// Number of points carrying an observed value.
pub fn historical_count(points: &[ForecastPoint]) -> usize {
    points.iter().filter(|p| p.is_historical()).count()
}

/// True when every point carries both bounds; a band can only be drawn
/// over a fully-bounded series.
pub fn has_full_bounds(points: &[ForecastPoint]) -> bool {
    !points.is_empty()
        && points.iter().all(|p| p.lower_bound.is_some() && p.upper_bound.is_some())
}

/// Direction of movement between two periods. Supplied or derived from a
/// raw delta; whether the movement is "good" is a separate concern
/// (`TrendIndicator::is_positive`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Up => "up",
            TrendDirection::Down => "down",
            TrendDirection::Stable => "stable",
        }
    }
}

/// One category row of the peer-benchmark panel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub category: String,
    pub user_value: f64,
    pub average_value: f64,
    pub top_performers_value: f64,
    pub percentile: f64,
    pub trend: TrendDirection,
    pub improvement: f64,
}

impl BenchmarkEntry {
    /// Try to construct an entry enforcing 0 <= percentile <= 100.
    pub fn try_new(
        category: impl Into<String>,
        user_value: f64,
        average_value: f64,
        top_performers_value: f64,
        percentile: f64,
        trend: TrendDirection,
        improvement: f64,
    ) -> Result<Self, SeriesError> {
        if !(0.0..=100.0).contains(&percentile) {
            return Err(SeriesError::PercentileOutOfRange);
        }
        Ok(Self {
            category: category.into(),
            user_value,
            average_value,
            top_performers_value,
            percentile,
            trend,
            improvement,
        })
    }
}

/// Accent color slot for a trend indicator tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricColor {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
}

/// Display value of an indicator tile; some tiles show text ("4.8 / 5").
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

/// A headline metric tile with its period-over-period movement.
/// `is_positive` comes from the data layer and is never re-derived here:
/// for a metric like cancellation rate a falling percentage is the good
/// direction, which the sign alone cannot express.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendIndicator {
    pub label: String,
    pub value: MetricValue,
    pub percentage: f64,
    pub is_positive: bool,
    pub color: MetricColor,
}
