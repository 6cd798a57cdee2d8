// File: crates/pulse-svg/src/theme.rs
// Summary: Light/Dark theming for chart rendering colors.

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub history_stroke: &'static str,
    pub projection_stroke: &'static str,
    pub band_fill: &'static str,
    pub target_stroke: &'static str,
    pub bar_user: &'static str,
    pub bar_average: &'static str,
    pub bar_top: &'static str,
    pub ring_track: &'static str,
    pub ring_sweep: &'static str,
    pub text: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            history_stroke: "#40a0ff",
            projection_stroke: "#ffb44a",
            band_fill: "#40a0ff2e",
            target_stroke: "#dc5050",
            bar_user: "#40a0ff",
            bar_average: "#6e6e78",
            bar_top: "#28c878",
            ring_track: "#28282d",
            ring_sweep: "#28c878",
            text: "#ebebf5",
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#fafafc",
            grid: "#e6e6eb",
            axis_line: "#3c3c46",
            axis_label: "#14141e",
            history_stroke: "#2078c8",
            projection_stroke: "#d2821e",
            band_fill: "#2078c82e",
            target_stroke: "#c83c3c",
            bar_user: "#2078c8",
            bar_average: "#9b9ba5",
            bar_top: "#14a05a",
            ring_track: "#e6e6eb",
            ring_sweep: "#14a05a",
            text: "#14141e",
        }
    }
}

/// Return the built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
