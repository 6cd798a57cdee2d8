// File: crates/pulse-svg/src/lib.rs
// Summary: SVG view layer entry point; options, shared axis drawing, file output.

use anyhow::Result;
use pulse_core::grid::{linspace, value_ticks};
use pulse_core::types::{HEIGHT, WIDTH};
use pulse_core::{Domain, PlotRect};

pub mod benchmark;
pub mod forecast;
pub mod indicators;
pub mod ring;
pub mod svg;
pub mod theme;
pub mod variant;

pub use benchmark::render_benchmarks;
pub use forecast::render_forecast;
pub use indicators::render_indicators;
pub use ring::render_progress_ring;
pub use svg::{Anchor, SvgDoc};
pub use theme::Theme;
pub use variant::{Variant, VariantSpec};

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub variant: Variant,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, variant: Variant::Default, theme: Theme::dark() }
    }
}

impl RenderOptions {
    /// Plotting rectangle left inside this surface by the variant's insets.
    pub fn plot_rect(&self) -> PlotRect {
        let ins = self.variant.spec().insets;
        PlotRect::from_ltrb(
            ins.left as f32,
            ins.top as f32,
            self.width as f32 - ins.right as f32,
            self.height as f32 - ins.bottom as f32,
        )
    }
}

/// Write a rendered document to disk, creating parent directories.
pub fn write_svg(path: impl AsRef<std::path::Path>, document: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document)?;
    Ok(())
}

// ---- shared chart furniture -------------------------------------------------

pub(crate) fn draw_grid(doc: &mut SvgDoc, plot: PlotRect, spec: &VariantSpec, theme: &Theme) {
    for x in linspace(plot.left as f64, plot.right as f64, spec.x_ticks.max(2)) {
        doc.line(x as f32, plot.top, x as f32, plot.bottom, theme.grid, 1.0);
    }
    for y in linspace(plot.top as f64, plot.bottom as f64, spec.y_ticks.max(2)) {
        doc.line(plot.left, y as f32, plot.right, y as f32, theme.grid, 1.0);
    }
}

pub(crate) fn draw_axes(doc: &mut SvgDoc, plot: PlotRect, theme: &Theme) {
    doc.line(plot.left, plot.bottom, plot.right, plot.bottom, theme.axis_line, 1.5);
    doc.line(plot.left, plot.top, plot.left, plot.bottom, theme.axis_line, 1.5);
}

pub(crate) fn draw_y_labels(
    doc: &mut SvgDoc,
    plot: PlotRect,
    domain: Domain,
    spec: &VariantSpec,
    theme: &Theme,
) {
    for (y, v) in value_ticks(domain, plot.height(), spec.y_ticks) {
        doc.text(
            plot.left - 8.0,
            plot.top + y + 4.0,
            11.0,
            theme.axis_label,
            Anchor::End,
            &format!("{v:.0}"),
        );
    }
}
