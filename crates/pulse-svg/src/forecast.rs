// File: crates/pulse-svg/src/forecast.rs
// Summary: Forecast chart view: history line, dashed projection, confidence band.

use pulse_core::{band_path, line_path, Domain, ForecastPoint, IndexScale, PointF, ValueScale};

use crate::svg::{Anchor, SvgDoc};
use crate::RenderOptions;

/// Render a forecast series to a standalone SVG document. Historical points
/// draw as a solid line, projected points as a dashed continuation, and a
/// complete set of bounds as the shaded confidence band underneath. The
/// optional target joins the domain scan so its reference line stays
/// on-chart.
pub fn render_forecast(points: &[ForecastPoint], target: Option<f64>, opts: &RenderOptions) -> String {
    let spec = opts.variant.spec();
    let plot = opts.plot_rect();
    let theme = &opts.theme;

    let mut doc = SvgDoc::new(opts.width, opts.height);
    doc.fill_background(theme.background);
    if points.is_empty() || !plot.is_drawable() {
        return doc.finish();
    }

    let mut domain = Domain::of_forecast(points);
    if let Some(t) = target {
        domain = domain.include(t);
    }
    let domain = domain.padded(0.02);

    let xs = IndexScale::new(plot.width(), points.len());
    let ys = ValueScale::new(plot.height(), domain);
    let px = |i: usize| plot.left + xs.to_px(i);
    let py = |v: f64| plot.top + ys.to_px(v);

    crate::draw_grid(&mut doc, plot, &spec, theme);

    // Confidence band sits under everything else. Bounds usually cover only
    // the projected tail; the band spans whatever contiguous run carries
    // both of them, index-aligned by construction.
    if spec.show_band {
        let mut upper: Vec<PointF> = Vec::new();
        let mut lower: Vec<PointF> = Vec::new();
        for (i, p) in points.iter().enumerate() {
            if let (Some(hi), Some(lo)) = (p.upper_bound, p.lower_bound) {
                upper.push(PointF::new(px(i), py(hi)));
                lower.push(PointF::new(px(i), py(lo)));
            }
        }
        if upper.len() > 1 {
            if let Some(d) = band_path(&upper, &lower) {
                doc.path(&d, "none", 0.0, theme.band_fill);
            }
        }
    }

    // Solid history over indices carrying an actual.
    let history: Vec<PointF> = points
        .iter()
        .enumerate()
        .filter_map(|(i, p)| p.actual.map(|a| PointF::new(px(i), py(a))))
        .collect();
    doc.path(&line_path(&history), theme.history_stroke, 2.0, "none");

    // Dashed projection, anchored on the last observed point so the two
    // lines meet.
    let last_hist = points.iter().rposition(|p| p.is_historical());
    let mut projection: Vec<PointF> = Vec::new();
    if let Some(i) = last_hist {
        if let Some(a) = points[i].actual {
            projection.push(PointF::new(px(i), py(a)));
        }
    }
    let from = last_hist.map(|i| i + 1).unwrap_or(0);
    for (i, p) in points.iter().enumerate().skip(from) {
        if !p.is_historical() {
            projection.push(PointF::new(px(i), py(p.forecast)));
        }
    }
    if projection.len() > 1 {
        doc.dashed_path(&line_path(&projection), theme.projection_stroke, 2.0, "6 4");
    }

    if let Some(t) = target {
        doc.dashed_line(plot.left, py(t), plot.right, py(t), theme.target_stroke, "4 4");
        if spec.show_labels {
            doc.text(plot.right, py(t) - 6.0, 11.0, theme.target_stroke, Anchor::End, "target");
        }
    }

    crate::draw_axes(&mut doc, plot, theme);
    crate::draw_y_labels(&mut doc, plot, domain, &spec, theme);
    if spec.show_labels {
        draw_x_labels(&mut doc, plot, points, &spec, theme);
    }

    doc.finish()
}

fn draw_x_labels(
    doc: &mut SvgDoc,
    plot: pulse_core::PlotRect,
    points: &[ForecastPoint],
    spec: &crate::VariantSpec,
    theme: &crate::Theme,
) {
    let n = points.len();
    let ticks = spec.x_ticks.max(2).min(n);
    let xs = IndexScale::new(plot.width(), n);
    for k in 0..ticks {
        let i = if ticks == 1 { 0 } else { k * (n - 1) / (ticks - 1) };
        doc.text(
            plot.left + xs.to_px(i),
            plot.bottom + 16.0,
            11.0,
            theme.axis_label,
            Anchor::Middle,
            &points[i].label,
        );
    }
}
