use crate::core::scaling;
use crate::dom;
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

// Owns the sizing and density scaling of one 2D drawing surface. All drawing
// downstream is expressed in logical (CSS) pixels; the backing store runs at
// viewport * devicePixelRatio, capped by core::scaling. A canvas that cannot
// produce a 2D context yields a surface whose renders are silent no-ops.
#[derive(Clone)]
pub struct Surface {
    inner: Rc<SurfaceInner>,
}

struct SurfaceInner {
    canvas: web::HtmlCanvasElement,
    ctx: Option<web::CanvasRenderingContext2d>,
    logical: Cell<Vec2>,
}

impl Surface {
    pub fn attach(canvas: web::HtmlCanvasElement) -> Self {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok());
        if ctx.is_none() {
            log::warn!("[surface] no 2d context; rendering disabled for this canvas");
        }
        let surface = Self {
            inner: Rc::new(SurfaceInner {
                canvas,
                ctx,
                logical: Cell::new(Vec2::ZERO),
            }),
        };
        surface.resize();
        surface
    }

    /// Re-read the viewport and density and resize the backing store.
    /// Assigning the canvas size resets context state, so the density scale
    /// is re-established here each time.
    pub fn resize(&self) {
        let (w, h) = dom::viewport_size();
        let dpr = scaling::effective_ratio(dom::device_pixel_ratio());
        self.inner.canvas.set_width(scaling::backing_extent(w, dpr));
        self.inner.canvas.set_height(scaling::backing_extent(h, dpr));
        if let Some(ctx) = &self.inner.ctx {
            _ = ctx.scale(dpr, dpr);
        }
        self.inner.logical.set(Vec2::new(w as f32, h as f32));
    }

    /// Logical size in CSS pixels; zero when the viewport is absent.
    pub fn logical_size(&self) -> Vec2 {
        self.inner.logical.get()
    }

    pub fn context(&self) -> Option<&web::CanvasRenderingContext2d> {
        self.inner.ctx.as_ref()
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.inner.canvas
    }
}
