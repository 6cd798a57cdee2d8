// File: crates/pulse-core/src/lib.rs
// Summary: Core library entry point; exports the analytics engine API.

pub mod animate;
pub mod domain;
pub mod geometry;
pub mod grid;
pub mod hittest;
pub mod path;
pub mod scale;
pub mod series;
pub mod stats;
pub mod types;

pub use animate::{ease_out_cubic, Animator, TrackId, DEFAULT_DURATION_MS};
pub use domain::Domain;
pub use geometry::{PlotRect, PointF};
pub use hittest::nearest_index;
pub use path::{arc_path, band_path, bar_rects, grouped_bar_rects, line_path};
pub use scale::{scale_x, scale_y, IndexScale, ValueScale};
pub use series::{
    BenchmarkEntry, ForecastPoint, MetricColor, MetricValue, SeriesError, TimeSeriesPoint,
    TrendDirection, TrendIndicator,
};
pub use stats::{
    completion_rate, goal_progress, growth_rate, is_top_performer, percentile_tier, summarize,
    trend_direction, PeriodComparison, SeriesSummary, Tier,
};
pub use types::Insets;
