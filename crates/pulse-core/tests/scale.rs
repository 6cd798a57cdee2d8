// File: crates/pulse-core/tests/scale.rs
// Purpose: Validate scale invariants and degenerate-domain behavior.

use pulse_core::{scale_x, scale_y, Domain, ValueScale};

#[test]
fn endpoints_map_to_plot_edges() {
    let d = Domain { min: 10.0, max: 60.0 };
    assert_eq!(scale_y(10.0, d, 240.0), 240.0, "min maps to the bottom");
    assert_eq!(scale_y(60.0, d, 240.0), 0.0, "max maps to the top");
}

#[test]
fn scale_y_is_monotone_non_increasing() {
    let d = Domain { min: 0.0, max: 100.0 };
    let h = 200.0;
    let mut prev = scale_y(0.0, d, h);
    for v in [10.0, 25.0, 40.0, 77.5, 99.0, 100.0] {
        let y = scale_y(v, d, h);
        assert!(y <= prev, "larger value should not map lower on screen");
        prev = y;
    }
}

#[test]
fn degenerate_domain_centers() {
    let d = Domain { min: 5.0, max: 5.0 };
    for v in [-10.0, 0.0, 5.0, 123.0] {
        assert_eq!(scale_y(v, d, 100.0), 50.0, "flat series centers the line");
    }
}

#[test]
fn single_point_series_maps_to_left_edge() {
    assert_eq!(scale_x(0, 1, 400.0), 0.0);
    assert_eq!(scale_x(0, 0, 400.0), 0.0);
}

#[test]
fn scale_x_spreads_indices_evenly() {
    assert_eq!(scale_x(0, 5, 400.0), 0.0);
    assert_eq!(scale_x(2, 5, 400.0), 200.0);
    assert_eq!(scale_x(4, 5, 400.0), 400.0);
}

#[test]
fn value_scale_roundtrips() {
    let s = ValueScale::new(300.0, Domain { min: 20.0, max: 120.0 });
    for v in [20.0, 45.0, 80.0, 120.0] {
        let back = s.from_px(s.to_px(v));
        assert!((back - v).abs() < 1e-3, "roundtrip drifted: {v} -> {back}");
    }
}
