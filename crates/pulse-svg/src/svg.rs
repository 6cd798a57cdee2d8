// File: crates/pulse-svg/src/svg.rs
// Summary: Minimal SVG element writer used by the chart renderers.

use std::fmt::Write as _;

/// Horizontal text anchor, as SVG spells it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Accumulates elements for one standalone SVG document.
pub struct SvgDoc {
    width: i32,
    height: i32,
    body: String,
}

impl SvgDoc {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height, body: String::new() }
    }

    pub fn fill_background(&mut self, color: &str) {
        let _ = writeln!(
            self.body,
            r#"  <rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
            self.width, self.height, color
        );
    }

    pub fn path(&mut self, d: &str, stroke: &str, stroke_width: f32, fill: &str) {
        if d.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"  <path d="{}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
            d, stroke, stroke_width, fill
        );
    }

    pub fn dashed_path(&mut self, d: &str, stroke: &str, stroke_width: f32, dash: &str) {
        if d.is_empty() {
            return;
        }
        let _ = writeln!(
            self.body,
            r#"  <path d="{}" stroke="{}" stroke-width="{}" stroke-dasharray="{}" fill="none"/>"#,
            d, stroke, stroke_width, dash
        );
    }

    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &str, stroke_width: f32) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, stroke, stroke_width
        );
    }

    pub fn dashed_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, stroke: &str, dash: &str) {
        let _ = writeln!(
            self.body,
            r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="1.5" stroke-dasharray="{}"/>"#,
            x1, y1, x2, y2, stroke, dash
        );
    }

    pub fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            x, y, w, h, fill
        );
    }

    pub fn circle(&mut self, cx: f32, cy: f32, r: f32, stroke: &str, stroke_width: f32) {
        let _ = writeln!(
            self.body,
            r#"  <circle cx="{}" cy="{}" r="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
            cx, cy, r, stroke, stroke_width
        );
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, fill: &str, anchor: Anchor, content: &str) {
        let _ = writeln!(
            self.body,
            r#"  <text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{}" font-family="sans-serif">{}</text>"#,
            x,
            y,
            size,
            fill,
            anchor.as_str(),
            escape(content)
        );
    }

    /// Assemble the final document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\">\n{}</svg>\n",
            self.width, self.height, self.width, self.height, self.body
        )
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
