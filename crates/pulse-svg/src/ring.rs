// File: crates/pulse-svg/src/ring.rs
// Summary: Goal-progress ring view: track circle plus sweep arc.

use pulse_core::{arc_path, goal_progress};

use crate::svg::{Anchor, SvgDoc};
use crate::RenderOptions;

const SWEEP_WIDTH: f32 = 10.0;

/// Render a radial goal gauge. The sweep covers `goal_progress(current,
/// target)` percent of the circle; an animated caller passes the currently
/// displayed (tweened) value as `current` each frame.
pub fn render_progress_ring(
    current: f64,
    target: f64,
    label: &str,
    opts: &RenderOptions,
) -> String {
    let theme = &opts.theme;
    let mut doc = SvgDoc::new(opts.width, opts.height);
    doc.fill_background(theme.background);

    let cx = opts.width as f32 / 2.0;
    let cy = opts.height as f32 / 2.0;
    let radius = (cx.min(cy) - 24.0).max(8.0);

    let progress = goal_progress(current, target);

    doc.circle(cx, cy, radius, theme.ring_track, SWEEP_WIDTH);
    doc.path(
        &arc_path(cx, cy, radius, progress / 100.0),
        theme.ring_sweep,
        SWEEP_WIDTH,
        "none",
    );

    doc.text(cx, cy + 2.0, 26.0, theme.text, Anchor::Middle, &format!("{progress:.0}%"));
    if !label.is_empty() {
        doc.text(cx, cy + 22.0, 11.0, theme.axis_label, Anchor::Middle, label);
    }

    doc.finish()
}
