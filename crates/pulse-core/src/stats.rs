// File: crates/pulse-core/src/stats.rs
// Summary: Derived summary statistics: rates, tiers, trends, period comparisons.

use serde::{Deserialize, Serialize};

use crate::series::{TimeSeriesPoint, TrendDirection};

/// Percentile at or above which a metric sits in the top tier.
pub const TIER_TOP: f64 = 90.0;
/// Percentile at or above which a metric sits in the high tier.
pub const TIER_HIGH: f64 = 75.0;
/// Percentile at or above which a metric sits in the mid tier.
pub const TIER_MID: f64 = 50.0;

/// "Near top performer" starts at this fraction of the top-performer value.
pub const NEAR_TOP_FACTOR: f64 = 0.9;

/// Discrete label derived from a continuous percentile. Thresholds are
/// inclusive at the lower bound of each band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Top,
    High,
    Mid,
    Low,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Top => "top",
            Tier::High => "high",
            Tier::Mid => "mid",
            Tier::Low => "low",
        }
    }
}

/// Classify a 0–100 percentile into its display tier.
pub fn percentile_tier(percentile: f64) -> Tier {
    if percentile >= TIER_TOP {
        Tier::Top
    } else if percentile >= TIER_HIGH {
        Tier::High
    } else if percentile >= TIER_MID {
        Tier::Mid
    } else {
        Tier::Low
    }
}

/// Completed-over-total as a rounded integer percent, clamped to [0, 100].
/// A zero or negative total is an undefined ratio and reports 0.
pub fn completion_rate(completed: f64, total: f64) -> u32 {
    if total <= 0.0 {
        return 0;
    }
    let pct = (completed / total * 100.0).round();
    pct.clamp(0.0, 100.0) as u32
}

/// True at or above `NEAR_TOP_FACTOR` of the top-performer value, not just
/// at or above the value itself.
pub fn is_top_performer(user_value: f64, top_performers_value: f64) -> bool {
    user_value >= top_performers_value * NEAR_TOP_FACTOR
}

/// Progress toward a goal as a percent, clamped to [0, 100]. A zero or
/// negative target reports 0.
pub fn goal_progress(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (current / target * 100.0).clamp(0.0, 100.0)
}

/// Pure sign classification of a period delta. Whether the direction is
/// favorable is the caller's concern (see `TrendIndicator::is_positive`).
pub fn trend_direction(delta: f64) -> TrendDirection {
    if delta > 0.0 {
        TrendDirection::Up
    } else if delta < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Stable
    }
}

/// Percent change between two periods. Defined as 0 when the previous
/// period is zero or negative (division guard; a negative base makes the
/// percentage meaningless).
pub fn growth_rate(latest: f64, previous: f64) -> f64 {
    if previous <= 0.0 {
        return 0.0;
    }
    (latest - previous) / previous * 100.0
}

/// Current-vs-previous-period movement for a metric widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeriodComparison {
    pub latest: f64,
    pub previous: f64,
    pub delta: f64,
    pub growth_pct: f64,
    pub direction: TrendDirection,
}

impl PeriodComparison {
    pub fn between(latest: f64, previous: f64) -> Self {
        let delta = latest - previous;
        Self {
            latest,
            previous,
            delta,
            growth_pct: growth_rate(latest, previous),
            direction: trend_direction(delta),
        }
    }
}

/// Aggregate summary of a series, feeding the headline stat tiles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesSummary {
    pub total: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub latest: f64,
}

impl SeriesSummary {
    /// Neutral all-zero summary for an empty series.
    pub const EMPTY: Self = Self { total: 0.0, mean: 0.0, min: 0.0, max: 0.0, latest: 0.0 };
}

/// Summarize a series. An empty series yields the neutral summary rather
/// than NaN means or infinite extrema.
pub fn summarize(points: &[TimeSeriesPoint]) -> SeriesSummary {
    if points.is_empty() {
        return SeriesSummary::EMPTY;
    }
    let mut total = 0.0f64;
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        total += p.value;
        min = min.min(p.value);
        max = max.max(p.value);
    }
    SeriesSummary {
        total,
        mean: total / points.len() as f64,
        min,
        max,
        latest: points[points.len() - 1].value,
    }
}
