// File: crates/pulse-svg/src/benchmark.rs
// Summary: Benchmark comparison view: grouped user/average/top bars per category.

use pulse_core::{grouped_bar_rects, is_top_performer, percentile_tier, BenchmarkEntry, Domain};

use crate::svg::{Anchor, SvgDoc};
use crate::RenderOptions;

const GROUP_GAP_FRAC: f32 = 0.3;

/// Render the peer-benchmark panel: one slot per category holding the
/// user / peer-average / top-performer bars, with the percentile tier over
/// each group. Bars rise from a zero baseline, so zero is folded into the
/// domain scan.
pub fn render_benchmarks(entries: &[BenchmarkEntry], opts: &RenderOptions) -> String {
    let spec = opts.variant.spec();
    let plot = opts.plot_rect();
    let theme = &opts.theme;

    let mut doc = SvgDoc::new(opts.width, opts.height);
    doc.fill_background(theme.background);
    if entries.is_empty() || !plot.is_drawable() {
        return doc.finish();
    }

    let mut domain = Domain::of_benchmarks(entries).include(0.0);
    // Headroom above the tallest bar for the tier badge.
    domain = domain.include(domain.max * 1.08);

    crate::draw_grid(&mut doc, plot, &spec, theme);

    let rows: Vec<Vec<f64>> = entries
        .iter()
        .map(|e| vec![e.user_value, e.average_value, e.top_performers_value])
        .collect();
    let colors = [theme.bar_user, theme.bar_average, theme.bar_top];
    let slot_w = plot.width() / entries.len() as f32;

    for (gi, group) in grouped_bar_rects(&rows, domain, plot, GROUP_GAP_FRAC).iter().enumerate() {
        for (bi, r) in group.iter().enumerate() {
            doc.rect(r.left, r.top, r.width(), r.height(), colors[bi.min(colors.len() - 1)]);
        }

        let entry = &entries[gi];
        let cx = plot.left + slot_w * (gi as f32 + 0.5);
        if spec.show_labels {
            doc.text(cx, plot.bottom + 16.0, 11.0, theme.axis_label, Anchor::Middle, &entry.category);

            let mut badge = format!(
                "P{:.0} {}",
                entry.percentile,
                percentile_tier(entry.percentile).as_str()
            );
            if is_top_performer(entry.user_value, entry.top_performers_value) {
                badge.push_str(" *");
            }
            let top_y = group.iter().map(|r| r.top).fold(plot.bottom, f32::min);
            doc.text(cx, top_y - 6.0, 10.0, theme.text, Anchor::Middle, &badge);
        }
    }

    crate::draw_axes(&mut doc, plot, theme);
    crate::draw_y_labels(&mut doc, plot, domain, &spec, theme);

    doc.finish()
}
