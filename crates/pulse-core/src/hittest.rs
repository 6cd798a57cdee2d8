// File: crates/pulse-core/src/hittest.rs
// Summary: Pointer-to-datapoint hit testing for tooltips and crosshairs.

use crate::scale::IndexScale;

/// Map a pointer x over a chart's plotting area to the nearest sample index.
///
/// Pointers outside the plotting rectangle clamp to the nearest endpoint
/// rather than reporting no match: the tooltip stays up, pinned to an edge
/// point, which makes the hover target forgiving. Returns `None` only for
/// an empty series or a non-positive plot width.
pub fn nearest_index(
    pointer_x: f32,
    plot_origin_x: f32,
    plot_width: f32,
    len: usize,
) -> Option<usize> {
    if len == 0 || plot_width <= 0.0 {
        return None;
    }
    if len == 1 {
        return Some(0);
    }
    let scale = IndexScale::new(plot_width, len);
    let idx = scale.from_px(pointer_x - plot_origin_x).round();
    Some(idx.clamp(0.0, (len - 1) as f32) as usize)
}

/// Pixel x (relative to the plot origin) of the sample a tooltip snapped
/// to, so the crosshair anchors on the datapoint instead of the pointer.
pub fn snap_x(index: usize, len: usize, plot_width: f32) -> f32 {
    IndexScale::new(plot_width, len).to_px(index.min(len.saturating_sub(1)))
}
