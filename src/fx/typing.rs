use crate::constants::{CURSOR_BLINK_MS, TYPING_CURSOR_ID, TYPING_ID, TYPING_TICK_MS};
use crate::core::TypingState;
use crate::dom;
use crate::events::Interval;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

// Self-typing headline with a blinking cursor. The element's own text is the
// source; it is replayed one character per tick from an empty prefix.
pub struct Typing {
    _type_tick: Option<Interval>,
    _blink_tick: Option<Interval>,
}

impl Typing {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let el = dom::html_element_by_id(document, TYPING_ID)?;
        let full = el.text_content().unwrap_or_default();
        el.set_text_content(Some(""));

        let state = Rc::new(RefCell::new(TypingState::new(full)));
        let type_el = el.clone();
        let type_state = Rc::clone(&state);
        let type_tick = Interval::new(TYPING_TICK_MS, move || {
            let mut s = type_state.borrow_mut();
            if s.tick() {
                type_el.set_text_content(Some(s.visible()));
            }
        });

        let blink_tick = dom::html_element_by_id(document, TYPING_CURSOR_ID).and_then(|cursor| {
            let visible = Cell::new(true);
            Interval::new(CURSOR_BLINK_MS, move || {
                visible.set(!visible.get());
                let value = if visible.get() { "visible" } else { "hidden" };
                _ = cursor.style().set_property("visibility", value);
            })
        });

        Some(Self {
            _type_tick: type_tick,
            _blink_tick: blink_tick,
        })
    }
}
