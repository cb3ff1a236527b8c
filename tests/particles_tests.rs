// Host-side tests for the particle simulation.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod particles {
    include!("../src/core/particles.rs");
}

use glam::Vec2;
use particles::*;

fn make_field(seed: u64) -> ParticleField {
    ParticleField::new(FieldParams::ambient(), Vec2::new(1024.0, 768.0), seed)
}

#[test]
fn population_is_created_at_configured_count() {
    let field = make_field(7);
    assert_eq!(field.len(), FieldParams::ambient().count);
    assert_eq!(
        ParticleField::new(FieldParams::burst(), Vec2::new(300.0, 300.0), 7).len(),
        6
    );
}

#[test]
fn population_is_conserved_over_many_steps() {
    let mut field = make_field(42);
    for _ in 0..1000 {
        field.step();
    }
    assert_eq!(field.len(), 80, "no particle is ever destroyed");
}

#[test]
fn positions_stay_within_margin_after_step() {
    let mut field = make_field(3);
    let bounds = field.bounds();
    for _ in 0..1000 {
        field.step();
        for p in field.particles() {
            assert!(p.pos.x >= -WRAP_MARGIN - 1e-3 && p.pos.x <= bounds.x + WRAP_MARGIN + 1e-3);
            assert!(p.pos.y >= -WRAP_MARGIN - 1e-3 && p.pos.y <= bounds.y + WRAP_MARGIN + 1e-3);
        }
    }
}

#[test]
fn wrap_translates_to_opposite_edge() {
    let extent = 500.0;
    // Past the far edge re-enters at the near margin and vice versa.
    assert_eq!(wrap_axis(extent + WRAP_MARGIN + 1.0, extent), -WRAP_MARGIN);
    assert_eq!(wrap_axis(-WRAP_MARGIN - 1.0, extent), extent + WRAP_MARGIN);
    // In-range positions pass through untouched.
    assert_eq!(wrap_axis(250.0, extent), 250.0);
    assert_eq!(wrap_axis(-WRAP_MARGIN, extent), -WRAP_MARGIN);
    assert_eq!(wrap_axis(extent + WRAP_MARGIN, extent), extent + WRAP_MARGIN);
}

#[test]
fn initial_velocities_respect_speed_cap() {
    let params = FieldParams::ambient();
    let field = make_field(11);
    for p in field.particles() {
        assert!(
            p.vel.length() <= params.max_speed + 1e-5,
            "velocity {:?} exceeds cap",
            p.vel
        );
    }
}

#[test]
fn initial_positions_lie_within_bounds() {
    let field = make_field(19);
    let bounds = field.bounds();
    for p in field.particles() {
        assert!(p.pos.x >= 0.0 && p.pos.x <= bounds.x);
        assert!(p.pos.y >= 0.0 && p.pos.y <= bounds.y);
    }
}

#[test]
fn same_seed_reproduces_the_field() {
    let a = make_field(123);
    let b = make_field(123);
    for (pa, pb) in a.particles().iter().zip(b.particles()) {
        assert_eq!(pa.pos, pb.pos);
        assert_eq!(pa.vel, pb.vel);
        assert_eq!(pa.radius, pb.radius);
    }
}

#[test]
fn different_seeds_differ() {
    let a = make_field(1);
    let b = make_field(2);
    let identical = a
        .particles()
        .iter()
        .zip(b.particles())
        .all(|(pa, pb)| pa.pos == pb.pos);
    assert!(!identical);
}

#[test]
fn zero_viewport_degrades_without_panicking() {
    let mut field = ParticleField::new(FieldParams::ambient(), Vec2::ZERO, 5);
    for _ in 0..10 {
        field.step();
    }
    assert_eq!(field.len(), 80);
}

#[test]
fn bounds_update_takes_effect_on_next_steps() {
    let mut field = make_field(9);
    field.set_bounds(Vec2::new(100.0, 100.0));
    for _ in 0..5000 {
        field.step();
    }
    for p in field.particles() {
        assert!(p.pos.x <= 100.0 + WRAP_MARGIN + 1e-3);
        assert!(p.pos.y <= 100.0 + WRAP_MARGIN + 1e-3);
    }
}
