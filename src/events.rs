use crate::dom;
use crate::input::{self, PointerState};
use crate::widget::SharedWidget;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store in step with its CSS box.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement, max_dpr: f64) {
    dom::sync_canvas_backing_size(canvas, max_dpr);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize, max_dpr);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Track the pointer over the whole viewport for the fluid layer.
pub fn wire_background_pointer(pointer: Rc<RefCell<PointerState>>) {
    let Some(window) = web::window() else {
        return;
    };
    let w = window.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        pointer.borrow_mut().uv = input::viewport_uv(&ev, &w);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Feed pointer position over the cube canvas into the widget's picker.
pub fn wire_cube_pointer(canvas: &web::HtmlCanvasElement, widget: SharedWidget) {
    let target = canvas.clone();
    let on_move_widget = widget.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let ndc = input::element_ndc(&ev, &target);
        on_move_widget.borrow_mut().set_pointer(ndc);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    let on_leave = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        widget.borrow_mut().set_pointer(None);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerleave", on_leave.as_ref().unchecked_ref());
    on_leave.forget();
}

/// Release the camera and landmarker when the page goes away.
pub fn wire_pagehide(widget: SharedWidget) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        log::info!("[cube] pagehide, tearing down");
        widget.borrow_mut().teardown();
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Remount after the page is restored from the back/forward cache.
pub fn wire_pageshow(widget: SharedWidget) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |ev: web::PageTransitionEvent| {
        if ev.persisted() {
            log::info!("[cube] restored from cache, remounting");
            crate::widget::mount(&widget);
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pageshow", closure.as_ref().unchecked_ref());
    closure.forget();
}
