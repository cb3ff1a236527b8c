use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Distance past the viewport edge a particle may drift before it is
/// translated to the opposite edge. Velocity is never altered by the wrap.
pub const WRAP_MARGIN: f32 = 50.0;

/// A drifting point of the ambient field. Positions and velocities are in
/// logical pixels and pixels-per-frame respectively.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

/// Population shape of a particle field. The ambient backdrop and the small
/// decorative burst are the same engine with different parameters.
#[derive(Clone, Debug)]
pub struct FieldParams {
    pub count: usize,
    /// Upper bound on velocity magnitude, px per frame.
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl FieldParams {
    /// Full-viewport ambient drift.
    pub fn ambient() -> Self {
        Self {
            count: 80,
            max_speed: 0.25,
            min_radius: 0.6,
            max_radius: 2.2,
        }
    }

    /// Sparse decorative burst around a hero element.
    pub fn burst() -> Self {
        Self {
            count: 6,
            max_speed: 0.9,
            min_radius: 1.5,
            max_radius: 3.0,
        }
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::ambient()
    }
}

/// Fixed-population particle simulation with wraparound boundaries.
///
/// Particles are created once from a seeded RNG and never destroyed; `step`
/// advances every particle by its velocity and translates any particle more
/// than [`WRAP_MARGIN`] outside the bounds to the opposite edge.
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
    params: FieldParams,
}

impl ParticleField {
    pub fn new(params: FieldParams, bounds: Vec2, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..params.count)
            .map(|_| spawn(&mut rng, &params, bounds))
            .collect();
        Self {
            particles,
            bounds,
            params,
        }
    }

    /// New viewport bounds take effect from the next `step`; positions are
    /// left alone and the wrap rule reins them in over the following frames.
    pub fn set_bounds(&mut self, bounds: Vec2) {
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.pos += p.vel;
            p.pos.x = wrap_axis(p.pos.x, bounds.x);
            p.pos.y = wrap_axis(p.pos.y, bounds.y);
        }
    }
}

fn spawn(rng: &mut StdRng, params: &FieldParams, bounds: Vec2) -> Particle {
    let pos = Vec2::new(uniform_to(rng, bounds.x), uniform_to(rng, bounds.y));
    let angle = rng.gen::<f32>() * TAU;
    let speed = rng.gen::<f32>() * params.max_speed;
    let vel = Vec2::new(angle.cos(), angle.sin()) * speed;
    let radius = if params.max_radius > params.min_radius {
        rng.gen_range(params.min_radius..params.max_radius)
    } else {
        params.min_radius
    };
    Particle { pos, vel, radius }
}

fn uniform_to(rng: &mut StdRng, extent: f32) -> f32 {
    if extent > 0.0 {
        rng.gen_range(0.0..extent)
    } else {
        0.0
    }
}

/// Wraparound law for one axis: positions beyond the margin re-enter from
/// the opposite edge; anything inside the margin is untouched.
pub fn wrap_axis(v: f32, extent: f32) -> f32 {
    if v < -WRAP_MARGIN {
        extent + WRAP_MARGIN
    } else if v > extent + WRAP_MARGIN {
        -WRAP_MARGIN
    } else {
        v
    }
}
