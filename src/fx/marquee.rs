use crate::constants::{
    MARQUEE_FORWARD_ID, MARQUEE_FORWARD_OPACITY, MARQUEE_REVERSE_DRIFT, MARQUEE_REVERSE_ID,
    MARQUEE_REVERSE_OPACITY, MARQUEE_REVERSE_RATE, MARQUEE_SECTION_ID, MARQUEE_VIEW_THRESHOLD,
};
use crate::core::{BandParams, MarqueeBand, BAND_MARGIN};
use crate::dom;
use crate::events::VisibilityWatch;
use crate::frame::FrameLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

// Two duplicated text bands translated horizontally each frame: the forward
// band follows scrolling, the reverse band runs the other way at half rate
// with a constant drift for parallax. Both nearly freeze while the section
// is actually in view.
pub struct Marquee {
    frame_loop: FrameLoop,
    _visibility: Option<VisibilityWatch>,
}

struct Bands {
    forward: MarqueeBand,
    reverse: MarqueeBand,
}

impl Marquee {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let section = document.get_element_by_id(MARQUEE_SECTION_ID)?;
        let forward_el = dom::html_element_by_id(document, MARQUEE_FORWARD_ID)?;
        let reverse_el = dom::html_element_by_id(document, MARQUEE_REVERSE_ID)?;

        let bands = Rc::new(RefCell::new(Bands {
            forward: MarqueeBand::new(BandParams::default()),
            reverse: MarqueeBand::new(BandParams {
                scroll_rate: MARQUEE_REVERSE_RATE,
                drift: MARQUEE_REVERSE_DRIFT,
                reverse: true,
            }),
        }));

        let watch_bands = Rc::clone(&bands);
        let watch_forward = forward_el.clone();
        let watch_reverse = reverse_el.clone();
        let visibility = VisibilityWatch::observe(&section, MARQUEE_VIEW_THRESHOLD, move |in_view| {
            let mut b = watch_bands.borrow_mut();
            b.forward.set_in_view(in_view);
            b.reverse.set_in_view(in_view);
            let (fwd_in, fwd_out) = MARQUEE_FORWARD_OPACITY;
            let (rev_in, rev_out) = MARQUEE_REVERSE_OPACITY;
            dom::set_opacity(&watch_forward, if in_view { fwd_in } else { fwd_out });
            dom::set_opacity(&watch_reverse, if in_view { rev_in } else { rev_out });
        });

        let frame_loop = FrameLoop::new();
        frame_loop.start(move |_frame| {
            let scroll = dom::scroll_offset() as f32;
            let (viewport_w, _) = dom::viewport_size();
            let band_width = if viewport_w > 0.0 {
                viewport_w as f32 + BAND_MARGIN
            } else {
                0.0
            };

            let mut b = bands.borrow_mut();
            b.forward.tick(scroll);
            b.reverse.tick(scroll);
            dom::set_transform(
                &forward_el,
                &format!("translateX({}px)", b.forward.translation(band_width)),
            );
            dom::set_transform(
                &reverse_el,
                &format!("translateX({}px)", b.reverse.translation(band_width)),
            );
        });

        Some(Self {
            frame_loop,
            _visibility: visibility,
        })
    }

    pub fn stop(&self) {
        self.frame_loop.stop();
    }
}
