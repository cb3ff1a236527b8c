use crate::constants::{FLOAT_BOB_PX, FLOAT_BOB_RATE, FLOAT_ID, FLOAT_TILT_DEG, FLOAT_TILT_RATE};
use crate::dom;
use crate::frame::FrameLoop;
use instant::Instant;
use web_sys as web;

// Gentle wall-clock bob and tilt on the hero element.
pub struct FloatEffect {
    frame_loop: FrameLoop,
}

impl FloatEffect {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let el = dom::html_element_by_id(document, FLOAT_ID)?;

        let started = Instant::now();
        let frame_loop = FrameLoop::new();
        frame_loop.start(move |_frame| {
            let t = started.elapsed().as_secs_f32();
            let bob = (t * FLOAT_BOB_RATE).sin() * FLOAT_BOB_PX;
            let tilt = (t * FLOAT_TILT_RATE).sin() * FLOAT_TILT_DEG;
            dom::set_transform(&el, &format!("translateY({bob}px) rotateY({tilt}deg)"));
        });

        Some(Self { frame_loop })
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }
}
