use crate::constants::{EMBED_FALLBACK_ID, EMBED_ID};
use crate::events::Listener;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, id: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

// The embedded 3D scene is an opaque collaborator; its fallback element is
// dismissed whether the embed loads or errors, so layout never waits on it.
pub struct EmbedFallback {
    _listeners: Vec<Listener>,
}

impl EmbedFallback {
    pub fn mount(document: &web::Document) -> Option<Self> {
        let embed = document.get_element_by_id(EMBED_ID)?;
        document.get_element_by_id(EMBED_FALLBACK_ID)?;

        let listeners = ["load", "error"]
            .into_iter()
            .map(|name| {
                let doc = document.clone();
                Listener::new(embed.as_ref(), name, move |_ev| {
                    hide(&doc, EMBED_FALLBACK_ID);
                })
            })
            .collect();
        Some(Self {
            _listeners: listeners,
        })
    }
}
