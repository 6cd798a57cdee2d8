// File: crates/pulse-core/tests/hittest.rs
// Purpose: Hover hit testing clamps to endpoints instead of dropping out.

use pulse_core::hittest::{nearest_index, snap_x};

#[test]
fn pointer_left_of_plot_pins_to_first_sample() {
    assert_eq!(nearest_index(50.0 - 50.0, 50.0, 400.0, 5), Some(0));
}

#[test]
fn pointer_right_of_plot_pins_to_last_sample() {
    assert_eq!(nearest_index(50.0 + 400.0 + 50.0, 50.0, 400.0, 5), Some(4));
}

#[test]
fn pointer_snaps_to_nearest_sample() {
    // 5 samples over 400px sit 100px apart; 160px is nearest to sample 2.
    assert_eq!(nearest_index(50.0 + 160.0, 50.0, 400.0, 5), Some(2));
    assert_eq!(nearest_index(50.0 + 140.0, 50.0, 400.0, 5), Some(1));
}

#[test]
fn degenerate_series_and_plot() {
    assert_eq!(nearest_index(10.0, 0.0, 400.0, 0), None, "nothing to hit");
    assert_eq!(nearest_index(10.0, 0.0, 0.0, 5), None, "zero-width plot");
    assert_eq!(nearest_index(999.0, 0.0, 400.0, 1), Some(0), "single sample always hit");
}

#[test]
fn snapped_pixel_matches_the_sample_grid() {
    assert_eq!(snap_x(2, 5, 400.0), 200.0);
    assert_eq!(snap_x(0, 1, 400.0), 0.0);
    assert_eq!(snap_x(9, 5, 400.0), 400.0, "index clamps into the series");
}
