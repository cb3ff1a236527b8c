use crate::constants::TRAIL_CANVAS_ID;
use crate::core::{TrailBuffer, TRAIL_CAPACITY};
use crate::dom;
use crate::events::Listener;
use crate::frame::FrameLoop;
use crate::render;
use crate::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Fading glow trail behind the pointer, rendered on a dedicated overlay
// canvas. The canvas is forced to pointer-events:none so the trail can never
// block interaction with content underneath it.
pub struct CursorTrail {
    frame_loop: FrameLoop,
    _pointer: Option<Listener>,
    _resize: Option<Listener>,
}

impl CursorTrail {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let canvas = dom::canvas_by_id(document, TRAIL_CANVAS_ID)?;
        _ = canvas.style().set_property("pointer-events", "none");
        let surface = Surface::attach(canvas);

        let trail = Rc::new(RefCell::new(TrailBuffer::new(TRAIL_CAPACITY)));

        // Samples arrive between frames and are picked up by the next draw.
        let pointer_trail = Rc::clone(&trail);
        let pointer = Listener::on_window("pointermove", move |ev: web::Event| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                pointer_trail
                    .borrow_mut()
                    .push(ev.client_x() as f32, ev.client_y() as f32);
            }
        });

        let resize_surface = surface.clone();
        let resize = Listener::on_window("resize", move |_ev| resize_surface.resize());

        let frame_loop = FrameLoop::new();
        frame_loop.start(move |_frame| {
            render::draw_trail(&surface, &trail.borrow());
        });

        Some(Self {
            frame_loop,
            _pointer: pointer,
            _resize: resize,
        })
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }
}
