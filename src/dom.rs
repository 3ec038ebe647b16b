use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("#{id} has unexpected type: {:?}", e))
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio, capped at `max_dpr`.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, max_dpr: f64) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().clamp(1.0, max_dpr);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn set_visible(el: &web::HtmlElement, visible: bool) {
    let cl = el.class_list();
    if visible {
        _ = cl.remove_1("hidden");
        _ = el.style().remove_property("display");
    } else {
        _ = cl.add_1("hidden");
        // fallback for environments without CSS class
        _ = el.style().set_property("display", "none");
    }
}

/// Current JavaScript call stack, best effort. `Error.stack` is not part of
/// the js-sys bindings, so it is read reflectively.
pub fn js_stack() -> String {
    js_sys::Reflect::get(&js_sys::Error::new(""), &JsValue::from_str("stack"))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default()
}

pub fn set_body_class(document: &web::Document, class: &str, on: bool) {
    if let Some(body) = document.body() {
        _ = body.class_list().toggle_with_force(class, on);
    }
}
