#![cfg(target_arch = "wasm32")]
//! Background-animation engine for the portfolio page.
//!
//! The host markup supplies canvases and text bands by id; every effect whose
//! element is present gets mounted with its own surface, frame loop, and
//! listeners. `shutdown()` tears all of it down again.

use crate::constants::*;
use crate::core::FieldParams;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod fx;
mod overlay;
mod render;
mod surface;

struct App {
    grid: Option<fx::GridBackdrop>,
    particles: Option<fx::ParticleBackdrop>,
    burst: Option<fx::ParticleBackdrop>,
    trail: Option<fx::CursorTrail>,
    marquee: Option<fx::Marquee>,
    float_fx: Option<fx::FloatEffect>,
    typing: Option<fx::Typing>,
    embed: Option<overlay::EmbedFallback>,
}

impl App {
    fn mounted_count(&self) -> usize {
        [
            self.grid.is_some(),
            self.particles.is_some(),
            self.burst.is_some(),
            self.trail.is_some(),
            self.marquee.is_some(),
            self.float_fx.is_some(),
            self.typing.is_some(),
            self.embed.is_some(),
        ]
        .iter()
        .filter(|m| **m)
        .count()
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    // Nothing in the backdrop engine may take the page down; a failed init
    // degrades to a static page.
    match init() {
        Ok(app) => {
            log::info!("[mount] {} effect(s) active", app.mounted_count());
            APP.with(|slot| *slot.borrow_mut() = Some(app));
        }
        Err(e) => log::error!("init error: {e:?}"),
    }
    Ok(())
}

/// Stop every running effect, cancel the frame loops, and detach listeners.
#[wasm_bindgen]
pub fn shutdown() {
    APP.with(|slot| slot.borrow_mut().take());
    log::info!("[mount] effects stopped");
}

fn init() -> anyhow::Result<App> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    let grid = mount(&document, "grid", |d| {
        fx::GridBackdrop::mount(d, GRID_CANVAS_ID)
    });
    let particles = mount(&document, "particles", |d| {
        fx::ParticleBackdrop::mount(
            d,
            PARTICLE_CANVAS_ID,
            FieldParams::ambient(),
            true,
            rand::random(),
        )
    });
    // The burst is decoration over content, so it keeps a transparent frame.
    let burst = mount(&document, "burst", |d| {
        fx::ParticleBackdrop::mount(d, BURST_CANVAS_ID, FieldParams::burst(), false, rand::random())
    });
    let trail = mount(&document, "trail", fx::CursorTrail::mount);
    let marquee = mount(&document, "marquee", fx::Marquee::mount);
    let float_fx = mount(&document, "float", fx::FloatEffect::mount);
    let typing = mount(&document, "typing", fx::Typing::mount);
    let embed = mount(&document, "embed", overlay::EmbedFallback::mount);

    Ok(App {
        grid,
        particles,
        burst,
        trail,
        marquee,
        float_fx,
        typing,
        embed,
    })
}

fn mount<T>(
    document: &web::Document,
    name: &str,
    mount_fn: impl FnOnce(&web::Document) -> Option<T>,
) -> Option<T> {
    let mounted = mount_fn(document);
    if mounted.is_some() {
        log::info!("[mount] {name} up");
    } else {
        log::debug!("[mount] {name} skipped (element not present)");
    }
    mounted
}
