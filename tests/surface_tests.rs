// Host-side tests for the density-scaling arithmetic.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod scaling {
    include!("../src/core/scaling.rs");
}

use scaling::*;

#[test]
fn unit_ratio_maps_viewport_exactly() {
    assert_eq!(backing_extent(1024.0, effective_ratio(1.0)), 1024);
    assert_eq!(backing_extent(768.0, effective_ratio(1.0)), 768);
}

#[test]
fn physical_is_logical_times_ratio() {
    let ratio = effective_ratio(1.5);
    assert_eq!(backing_extent(800.0, ratio), 1200);
    assert_eq!(backing_extent(600.0, ratio), 900);
}

#[test]
fn density_is_capped() {
    assert_eq!(effective_ratio(3.0), DENSITY_CAP);
    assert_eq!(backing_extent(500.0, effective_ratio(4.0)), 1000);
}

#[test]
fn missing_or_bogus_ratio_falls_back_to_one() {
    assert_eq!(effective_ratio(0.0), 1.0);
    assert_eq!(effective_ratio(-2.0), 1.0);
}

#[test]
fn zero_viewport_degrades_to_a_one_pixel_store() {
    assert_eq!(backing_extent(0.0, 2.0), 1);
}
