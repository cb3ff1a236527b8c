use crate::core::{FieldParams, ParticleField};
use crate::dom;
use crate::events::Listener;
use crate::frame::FrameLoop;
use crate::render;
use crate::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// Drifting particle field. The ambient backdrop and the decorative burst
// both mount through here with different FieldParams.
pub struct ParticleBackdrop {
    frame_loop: FrameLoop,
    _resize: Option<Listener>,
}

impl ParticleBackdrop {
    pub fn mount(
        document: &web::Document,
        canvas_id: &str,
        params: FieldParams,
        fill_backdrop: bool,
        seed: u64,
    ) -> Option<Self> {
        let canvas = dom::canvas_by_id(document, canvas_id)?;
        let surface = Surface::attach(canvas);

        let field = Rc::new(RefCell::new(ParticleField::new(
            params,
            surface.logical_size(),
            seed,
        )));

        // Resizing re-syncs both the backing store and the wrap bounds; the
        // particles themselves drift back in under the wraparound rule.
        let resize_surface = surface.clone();
        let resize_field = Rc::clone(&field);
        let resize = Listener::on_window("resize", move |_ev| {
            resize_surface.resize();
            resize_field
                .borrow_mut()
                .set_bounds(resize_surface.logical_size());
        });

        let frame_loop = FrameLoop::new();
        frame_loop.start(move |_frame| {
            let mut field = field.borrow_mut();
            field.step();
            render::draw_particles(&surface, &field, fill_backdrop);
        });

        Some(Self {
            frame_loop,
            _resize: resize,
        })
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }
}
