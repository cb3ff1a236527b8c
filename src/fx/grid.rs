use crate::core::GridPhase;
use crate::dom;
use crate::events::Listener;
use crate::frame::FrameLoop;
use crate::render;
use crate::surface::Surface;
use web_sys as web;

// Animated blueprint grid behind the page content. All grid state lives in
// the frame closure; resize only touches the surface, the next frame simply
// redraws against the new bounds.
pub struct GridBackdrop {
    frame_loop: FrameLoop,
    _resize: Option<Listener>,
}

impl GridBackdrop {
    pub fn mount(document: &web::Document, canvas_id: &str) -> Option<Self> {
        let canvas = dom::canvas_by_id(document, canvas_id)?;
        let surface = Surface::attach(canvas);

        let resize_surface = surface.clone();
        let resize = Listener::on_window("resize", move |_ev| resize_surface.resize());

        let mut phase = GridPhase::new();
        let frame_loop = FrameLoop::new();
        frame_loop.start(move |_frame| {
            phase.advance();
            render::draw_grid(&surface, &phase);
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
