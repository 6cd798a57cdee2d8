// File: crates/pulse-core/src/path.rs
// Summary: Path construction: polylines, confidence bands, bar layout, ring arcs.

use crate::domain::Domain;
use crate::geometry::{PlotRect, PointF};
use crate::scale::ValueScale;

/// Sweep fraction cap for ring arcs; a full 360° arc has coincident
/// endpoints and collapses to nothing.
pub const MAX_ARC_SWEEP: f64 = 0.9995;

/// Build an SVG polyline path (`M x y L x y …`) over ordered points.
/// Straight segments only; an empty slice yields an empty path.
pub fn line_path(points: &[PointF]) -> String {
    let mut it = points.iter();
    let first = match it.next() {
        Some(p) => p,
        None => return String::new(),
    };
    let mut path = format!("M {} {}", first.x, first.y);
    for p in it {
        path.push_str(&format!(" L {} {}", p.x, p.y));
    }
    path
}

/// Build a closed confidence-band polygon: the upper bound traced forward,
/// the lower bound traced in reverse index order, then `Z`.
///
/// The reversal is load-bearing: appending the lower bound forward produces
/// a self-intersecting bow-tie instead of a band. Mismatched or empty bound
/// arrays mean there is no band to draw and return `None`.
pub fn band_path(upper: &[PointF], lower: &[PointF]) -> Option<String> {
    if upper.is_empty() || upper.len() != lower.len() {
        return None;
    }
    let mut path = format!("M {} {}", upper[0].x, upper[0].y);
    for p in &upper[1..] {
        path.push_str(&format!(" L {} {}", p.x, p.y));
    }
    for p in lower.iter().rev() {
        path.push_str(&format!(" L {} {}", p.x, p.y));
    }
    path.push_str(" Z");
    Some(path)
}

/// Lay out one bar per value across the plot width, rising from the plot
/// bottom to the value's scaled y. `gap_frac` is the fraction of each slot
/// left empty around the bar.
pub fn bar_rects(values: &[f64], domain: Domain, plot: PlotRect, gap_frac: f32) -> Vec<PlotRect> {
    if values.is_empty() || !plot.is_drawable() {
        return Vec::new();
    }
    let scale = ValueScale::new(plot.height(), domain);
    let slot = plot.width() / values.len() as f32;
    let bar_w = (slot * (1.0 - gap_frac.clamp(0.0, 0.95))).max(1.0);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = plot.left + slot * i as f32 + (slot - bar_w) / 2.0;
            let y = plot.top + scale.to_px(v);
            PlotRect::from_ltrb(x, y.min(plot.bottom), x + bar_w, plot.bottom)
        })
        .collect()
}

/// Lay out grouped bars (e.g. user / average / top per category): one slot
/// per group, the group's bars side by side inside it. Returns one rect row
/// per group, index-aligned with the input.
pub fn grouped_bar_rects(
    groups: &[Vec<f64>],
    domain: Domain,
    plot: PlotRect,
    gap_frac: f32,
) -> Vec<Vec<PlotRect>> {
    if groups.is_empty() || !plot.is_drawable() {
        return Vec::new();
    }
    let scale = ValueScale::new(plot.height(), domain);
    let slot = plot.width() / groups.len() as f32;
    let inner = slot * (1.0 - gap_frac.clamp(0.0, 0.95));
    groups
        .iter()
        .enumerate()
        .map(|(gi, group)| {
            if group.is_empty() {
                return Vec::new();
            }
            let bar_w = (inner / group.len() as f32).max(1.0);
            let x0 = plot.left + slot * gi as f32 + (slot - inner) / 2.0;
            group
                .iter()
                .enumerate()
                .map(|(bi, &v)| {
                    let x = x0 + bar_w * bi as f32;
                    let y = plot.top + scale.to_px(v);
                    PlotRect::from_ltrb(x, y.min(plot.bottom), x + bar_w, plot.bottom)
                })
                .collect()
        })
        .collect()
}

/// Point on a circle at `frac` of a full clockwise turn starting from
/// 12 o'clock.
pub fn ring_point(cx: f32, cy: f32, radius: f32, frac: f64) -> PointF {
    let theta = (frac * std::f64::consts::TAU) - std::f64::consts::FRAC_PI_2;
    PointF::new(
        cx + radius * theta.cos() as f32,
        cy + radius * theta.sin() as f32,
    )
}

/// Build the SVG arc command for a progress-ring sweep covering `frac` of
/// the circle (clockwise from 12 o'clock). Zero or negative progress yields
/// an empty path; a full sweep is capped just short of 360° so the arc's
/// endpoints stay distinct.
pub fn arc_path(cx: f32, cy: f32, radius: f32, frac: f64) -> String {
    if frac <= 0.0 || radius <= 0.0 {
        return String::new();
    }
    let frac = frac.min(MAX_ARC_SWEEP);
    let start = ring_point(cx, cy, radius, 0.0);
    let end = ring_point(cx, cy, radius, frac);
    let large_arc = if frac > 0.5 { 1 } else { 0 };
    format!(
        "M {} {} A {} {} 0 {} 1 {} {}",
        start.x, start.y, radius, radius, large_arc, end.x, end.y
    )
}
