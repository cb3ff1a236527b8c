use crate::constants::*;
use crate::core::{
    blob_opacity, blob_size, line_positions, GridPhase, ParticleField, TrailBuffer, CELL_SIZE,
};
use crate::surface::Surface;
use std::f64::consts::PI;

// All drawing for the canvas-backed effects. Every function takes the
// surface and bails out silently when it has no 2D context; coordinates are
// logical pixels (the surface carries the density transform).

pub fn draw_grid(surface: &Surface, phase: &GridPhase) {
    let Some(ctx) = surface.context() else {
        return;
    };
    let size = surface.logical_size();
    let (w, h) = (size.x as f64, size.y as f64);

    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str(BACKDROP_FILL);
    ctx.fill_rect(0.0, 0.0, w, h);

    let offset = phase.offset(CELL_SIZE);

    ctx.set_stroke_style_str(GRID_LINE_COLOR);
    ctx.set_line_width(1.0);
    for x in line_positions(offset.x, size.x, CELL_SIZE) {
        ctx.begin_path();
        ctx.move_to(x as f64, 0.0);
        ctx.line_to(x as f64, h);
        ctx.stroke();
    }
    for y in line_positions(offset.y, size.y, CELL_SIZE) {
        ctx.begin_path();
        ctx.move_to(0.0, y as f64);
        ctx.line_to(w, y as f64);
        ctx.stroke();
    }

    ctx.set_fill_style_str(GRID_DOT_COLOR);
    for x in line_positions(offset.x, size.x, CELL_SIZE) {
        for y in line_positions(offset.y, size.y, CELL_SIZE) {
            ctx.begin_path();
            _ = ctx.arc(x as f64, y as f64, GRID_DOT_RADIUS, 0.0, 2.0 * PI);
            ctx.fill();
        }
    }
}

pub fn draw_particles(surface: &Surface, field: &ParticleField, fill_backdrop: bool) {
    let Some(ctx) = surface.context() else {
        return;
    };
    let size = surface.logical_size();

    ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    if fill_backdrop {
        ctx.set_fill_style_str(BACKDROP_FILL);
        ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }
    ctx.save();
    ctx.set_fill_style_str(PARTICLE_FILL);
    ctx.set_shadow_color(PARTICLE_GLOW_COLOR);
    ctx.set_shadow_blur(PARTICLE_GLOW_BLUR);
    for p in field.particles() {
        ctx.begin_path();
        _ = ctx.arc(p.pos.x as f64, p.pos.y as f64, p.radius as f64, 0.0, 2.0 * PI);
        ctx.fill();
    }
    ctx.restore();
}

pub fn draw_trail(surface: &Surface, trail: &TrailBuffer) {
    let Some(ctx) = surface.context() else {
        return;
    };
    let size = surface.logical_size();

    ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    // Oldest-first, so newer blobs occlude older ones.
    for (sample, recency) in trail.iter() {
        let radius = (blob_size(recency) / 2.0) as f64;
        let (x, y) = (sample.x as f64, sample.y as f64);
        let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, radius) else {
            continue;
        };
        _ = gradient.add_color_stop(0.0, TRAIL_INNER_COLOR);
        _ = gradient.add_color_stop(1.0, TRAIL_OUTER_COLOR);
        ctx.set_global_alpha(blob_opacity(recency) as f64);
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.begin_path();
        _ = ctx.arc(x, y, radius, 0.0, 2.0 * PI);
        ctx.fill();
    }
    ctx.set_global_alpha(1.0);
}
