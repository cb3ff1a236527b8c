use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Self-rescheduling requestAnimationFrame loop with explicit cancellation.
// Each instance holds its own closure and pending handle, so teardown is
// local: stop() cancels the pending frame and drops the closure, which also
// breaks the Rc cycle between the closure and the loop state. At most one
// frame request is outstanding per instance.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

struct LoopInner {
    raf_id: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
    frames: Cell<u64>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(LoopInner {
                raf_id: Cell::new(None),
                tick: RefCell::new(None),
                frames: Cell::new(0),
            }),
        }
    }

    pub fn is_running(&self) -> bool {
        self.inner.raf_id.get().is_some()
    }

    /// Begin invoking `callback` once per display refresh, passing the
    /// elapsed frame count. A running loop is stopped and restarted.
    pub fn start(&self, mut callback: impl FnMut(u64) + 'static) {
        self.stop();
        self.inner.frames.set(0);
        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(move || {
            let frame = inner.frames.get();
            inner.frames.set(frame.wrapping_add(1));
            callback(frame);
            // Re-request only while still running; stop() may have been
            // called from an event handler between frames.
            if inner.raf_id.get().is_some() {
                inner.raf_id.set(request_frame(&inner));
            }
        }) as Box<dyn FnMut()>);
        *self.inner.tick.borrow_mut() = Some(closure);
        self.inner.raf_id.set(request_frame(&self.inner));
    }

    /// Cancel the pending frame; the callback is never invoked again.
    pub fn stop(&self) {
        if let Some(id) = self.inner.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        self.inner.tick.borrow_mut().take();
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(inner: &Rc<LoopInner>) -> Option<i32> {
    let window = web::window()?;
    let tick = inner.tick.borrow();
    let closure = tick.as_ref()?;
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .ok()
}
