// Host-side tests for the marquee scroll engine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod marquee {
    include!("../src/core/marquee.rs");
}

use marquee::*;

const BAND_W: f32 = 1024.0 + BAND_MARGIN;

#[test]
fn first_tick_seeds_the_baseline_without_motion() {
    let mut band = MarqueeBand::new(BandParams::default());
    band.tick(500.0);
    assert_eq!(band.translation(BAND_W), 0.0);
}

#[test]
fn scroll_deltas_advance_the_phase() {
    let mut band = MarqueeBand::new(BandParams::default());
    band.tick(0.0);
    band.tick(100.0);
    assert!((band.phase() - 100.0).abs() < 1e-4);
    assert!((band.translation(BAND_W) - -100.0).abs() < 1e-4);
}

#[test]
fn translation_is_continuous_across_the_in_view_flip() {
    let mut band = MarqueeBand::new(BandParams::default());
    band.tick(0.0);
    band.tick(200.0);
    let before = band.translation(BAND_W);

    // Flipping visibility with no scroll change must not move the band.
    band.set_in_view(true);
    band.tick(200.0);
    assert_eq!(band.translation(BAND_W), before);

    // Subsequent motion happens at the slow rate, not via a jump to
    // scroll * slow_factor.
    band.tick(300.0);
    let after = band.translation(BAND_W);
    let step = (after - before).abs();
    assert!((step - 100.0 * IN_VIEW_FACTOR).abs() < 1e-3, "step {step}");
}

#[test]
fn in_view_only_changes_the_rate() {
    let mut fast = MarqueeBand::new(BandParams::default());
    let mut slow = MarqueeBand::new(BandParams::default());
    slow.set_in_view(true);
    for b in [&mut fast, &mut slow] {
        b.tick(0.0);
        b.tick(50.0);
    }
    let ratio = slow.phase() / fast.phase();
    assert!((ratio - IN_VIEW_FACTOR / OUT_VIEW_FACTOR).abs() < 1e-4);
}

#[test]
fn forward_translation_wraps_without_a_seam() {
    let mut band = MarqueeBand::new(BandParams::default());
    band.tick(0.0);
    let mut offset = 0.0;
    for _ in 0..400 {
        offset += 37.0;
        band.tick(offset);
        let t = band.translation(BAND_W);
        assert!(t <= 0.0 && t > -BAND_W, "translation {t} out of band range");
    }
}

#[test]
fn reversed_band_translates_in_the_opposite_range() {
    let mut band = MarqueeBand::new(BandParams {
        scroll_rate: 0.5,
        drift: 0.0,
        reverse: true,
    });
    band.tick(0.0);
    band.tick(100.0);
    // Half rate, opposite direction: starts one band-width left and walks
    // toward zero.
    let t = band.translation(BAND_W);
    assert!((t - (50.0 - BAND_W)).abs() < 1e-3, "translation {t}");
    assert!(t >= -BAND_W && t < 0.0);
}

#[test]
fn drift_advances_without_any_scrolling() {
    let mut band = MarqueeBand::new(BandParams {
        scroll_rate: 1.0,
        drift: 1.2,
        reverse: true,
    });
    band.tick(0.0);
    for _ in 0..10 {
        band.tick(0.0);
    }
    assert!((band.phase() - 12.0).abs() < 1e-4);
}

#[test]
fn upward_scroll_is_handled_by_the_modulo() {
    let mut band = MarqueeBand::new(BandParams::default());
    band.tick(1000.0);
    band.tick(0.0); // scroll back to the top
    let t = band.translation(BAND_W);
    assert!(t <= 0.0 && t > -BAND_W);
}

#[test]
fn zero_band_width_yields_no_translation() {
    let mut band = MarqueeBand::new(BandParams::default());
    band.tick(0.0);
    band.tick(500.0);
    assert_eq!(band.translation(0.0), 0.0);
    assert_eq!(band.translation(-10.0), 0.0);
}
