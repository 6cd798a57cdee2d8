// File: crates/pulse-svg/src/indicators.rs
// Summary: Trends widget view: a row of headline metric tiles.

use pulse_core::{trend_direction, MetricColor, MetricValue, TrendDirection, TrendIndicator};

use crate::svg::{Anchor, SvgDoc};
use crate::RenderOptions;

const TILE_GAP: f32 = 12.0;
const TILE_PAD: f32 = 14.0;

/// Render the trend-indicator strip: one tile per metric with its headline
/// value and period-over-period movement. The favorable/unfavorable coloring
/// comes from the supplied `is_positive`, never from the sign of the
/// percentage; a falling cancellation rate is a good number.
pub fn render_indicators(indicators: &[TrendIndicator], opts: &RenderOptions) -> String {
    let theme = &opts.theme;
    let mut doc = SvgDoc::new(opts.width, opts.height);
    doc.fill_background(theme.background);
    if indicators.is_empty() {
        return doc.finish();
    }

    let n = indicators.len() as f32;
    let tile_w = (opts.width as f32 - TILE_GAP * (n + 1.0)) / n;
    let tile_h = opts.height as f32 - TILE_GAP * 2.0;

    for (i, ind) in indicators.iter().enumerate() {
        let x = TILE_GAP + (tile_w + TILE_GAP) * i as f32;
        let y = TILE_GAP;
        doc.rect(x, y, tile_w, tile_h, theme.grid);

        doc.text(x + TILE_PAD, y + 22.0, 11.0, theme.axis_label, Anchor::Start, &ind.label);

        let headline = match &ind.value {
            MetricValue::Number(v) => format!("{v:.0}"),
            MetricValue::Text(s) => s.clone(),
        };
        doc.text(x + TILE_PAD, y + 48.0, 22.0, accent(ind.color, theme), Anchor::Start, &headline);

        let movement = format!("{} {:+.1}%", glyph(trend_direction(ind.percentage)), ind.percentage);
        let movement_color = if ind.is_positive { theme.bar_top } else { theme.target_stroke };
        doc.text(x + TILE_PAD, y + 68.0, 12.0, movement_color, Anchor::Start, &movement);
    }

    doc.finish()
}

fn glyph(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "▲",
        TrendDirection::Down => "▼",
        TrendDirection::Stable => "•",
    }
}

fn accent(color: MetricColor, theme: &crate::Theme) -> &'static str {
    match color {
        MetricColor::Primary => theme.history_stroke,
        MetricColor::Success => theme.bar_top,
        MetricColor::Warning => theme.projection_stroke,
        MetricColor::Danger => theme.target_stroke,
        MetricColor::Info => theme.axis_label,
    }
}
