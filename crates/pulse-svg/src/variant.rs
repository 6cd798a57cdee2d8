// File: crates/pulse-svg/src/variant.rs
// Summary: Closed presentation-variant tags dispatched through one lookup.

use pulse_core::Insets;

/// Presentation variant of a dashboard panel. A closed tag dispatched
/// through a single lookup keeps the scale/path/statistic logic independent
/// of how a panel is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    Default,
    Compact,
    Detailed,
    Mobile,
    List,
}

/// Layout knobs resolved from a variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantSpec {
    pub insets: Insets,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub show_band: bool,
    pub show_labels: bool,
}

impl Variant {
    /// Resolve the layout for this variant. The single source of truth for
    /// per-variant presentation differences.
    pub fn spec(self) -> VariantSpec {
        match self {
            Variant::Default => VariantSpec {
                insets: Insets::default(),
                x_ticks: 6,
                y_ticks: 5,
                show_band: true,
                show_labels: true,
            },
            Variant::Compact => VariantSpec {
                insets: Insets::new(36, 16, 16, 24),
                x_ticks: 4,
                y_ticks: 3,
                show_band: true,
                show_labels: false,
            },
            Variant::Detailed => VariantSpec {
                insets: Insets::new(64, 32, 40, 48),
                x_ticks: 8,
                y_ticks: 6,
                show_band: true,
                show_labels: true,
            },
            Variant::Mobile => VariantSpec {
                insets: Insets::new(32, 12, 16, 28),
                x_ticks: 3,
                y_ticks: 3,
                show_band: false,
                show_labels: true,
            },
            Variant::List => VariantSpec {
                insets: Insets::new(24, 8, 8, 16),
                x_ticks: 2,
                y_ticks: 2,
                show_band: false,
                show_labels: false,
            },
        }
    }
}
