use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle to a running `requestAnimationFrame` loop.
#[derive(Clone)]
pub struct LoopHandle {
    raf_id: Rc<Cell<Option<i32>>>,
    cancelled: Rc<Cell<bool>>,
    tick: TickSlot,
}

impl LoopHandle {
    /// Stop the loop. The pending frame, if any, is cancelled and the
    /// frame closure is dropped along with everything it captured.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // The closure holds a clone of this handle; taking it breaks the cycle.
        let released = self.tick.borrow_mut().take();
        drop(released);
    }
}

/// Drive `on_frame` from `requestAnimationFrame` with the frame timestamp
/// in milliseconds.
pub fn start_loop(mut on_frame: impl FnMut(f64) + 'static) -> LoopHandle {
    let handle = LoopHandle {
        raf_id: Rc::new(Cell::new(None)),
        cancelled: Rc::new(Cell::new(false)),
        tick: Rc::new(RefCell::new(None)),
    };
    let h = handle.clone();
    *handle.tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        h.raf_id.set(None);
        if h.cancelled.get() {
            return;
        }
        on_frame(ts);
        if h.cancelled.get() {
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), h.tick.borrow().as_ref()) {
            h.raf_id
                .set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (web::window(), handle.tick.borrow().as_ref()) {
        handle
            .raf_id
            .set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
    handle
}
