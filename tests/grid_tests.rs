// Host-side tests for the blueprint-grid phase arithmetic.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod grid {
    include!("../src/core/grid.rs");
}

use grid::*;

fn phase_at(frames: u32) -> GridPhase {
    let mut p = GridPhase::new();
    for _ in 0..frames {
        p.advance();
    }
    p
}

#[test]
fn offset_starts_at_zero() {
    let p = GridPhase::new();
    assert_eq!(p.offset(CELL_SIZE), glam::Vec2::ZERO);
}

#[test]
fn offset_stays_within_one_cell() {
    let mut p = GridPhase::new();
    for _ in 0..10_000 {
        p.advance();
        let o = p.offset(CELL_SIZE);
        assert!(o.x >= 0.0 && o.x < CELL_SIZE);
        assert!(o.y >= 0.0 && o.y < CELL_SIZE);
    }
}

#[test]
fn offset_is_periodic_in_the_cell_size() {
    // One full x-period is CELL_SIZE / DRIFT_X frames.
    let period_x = (CELL_SIZE / DRIFT_X) as u32;
    let a = phase_at(123);
    let b = phase_at(123 + period_x);
    let (oa, ob) = (a.offset(CELL_SIZE), b.offset(CELL_SIZE));
    assert!((oa.x - ob.x).abs() < 1e-2, "{} vs {}", oa.x, ob.x);

    let period_y = (CELL_SIZE / DRIFT_Y) as u32;
    let c = phase_at(123 + period_y);
    let oc = c.offset(CELL_SIZE);
    assert!((oa.y - oc.y).abs() < 1e-2, "{} vs {}", oa.y, oc.y);
}

#[test]
fn degenerate_cell_size_yields_static_grid() {
    let p = phase_at(997);
    assert_eq!(p.offset(0.0), glam::Vec2::ZERO);
    assert_eq!(p.offset(-4.0), glam::Vec2::ZERO);
}

#[test]
fn lines_cover_one_cell_beyond_each_edge() {
    let positions: Vec<f32> = line_positions(10.0, 100.0, 40.0).collect();
    assert_eq!(positions.first(), Some(&-10.0));
    let last = *positions.last().unwrap();
    assert!(last >= 100.0, "last line {last} must reach past the far edge");
    for pair in positions.windows(2) {
        assert!((pair[1] - pair[0] - 40.0).abs() < 1e-4, "uniform spacing");
    }
}

#[test]
fn lines_are_empty_for_degenerate_inputs() {
    assert_eq!(line_positions(0.0, 100.0, 0.0).count(), 0);
    assert_eq!(line_positions(0.0, 100.0, -1.0).count(), 0);
    assert_eq!(line_positions(0.0, -1.0, 40.0).count(), 0);
}

#[test]
fn zero_extent_still_draws_the_seam_lines() {
    // A zero-sized viewport degrades to a tiny static set, never an error.
    let positions: Vec<f32> = line_positions(0.0, 0.0, 40.0).collect();
    assert!(!positions.is_empty());
    assert!(positions.iter().all(|x| *x <= 40.0));
}
