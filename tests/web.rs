#![cfg(target_arch = "wasm32")]
// Browser tests for the DOM helpers, the section observer and the frame loop;
// run with `wasm-pack test --headless --chrome`.

#![allow(dead_code)]
mod dom {
    include!("../src/dom.rs");
}
mod observer {
    include!("../src/observer.rs");
}
mod frame_loop {
    include!("../src/frame_loop.rs");
}

use folio_core::{section_channel, SectionId};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_div(document: &web_sys::Document, id: &str) -> web_sys::HtmlElement {
    let el = document
        .create_element("div")
        .unwrap()
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap();
    el.set_id(id);
    document.body().unwrap().append_child(&el).unwrap();
    el
}

#[wasm_bindgen_test]
fn set_visible_toggles_class_and_display() {
    let document = dom::window_document().unwrap();
    let el = fresh_div(&document, "visibility-probe");
    el.style().set_property("border-color", "#fff").unwrap();

    dom::set_visible(&el, false);
    assert!(el.class_list().contains("hidden"));
    assert_eq!(el.style().get_property_value("display").unwrap(), "none");

    dom::set_visible(&el, true);
    assert!(!el.class_list().contains("hidden"));
    assert_eq!(el.style().get_property_value("display").unwrap(), "");
    // Unrelated inline styles survive
    assert_eq!(el.style().get_property_value("border-color").unwrap(), "rgb(255, 255, 255)");
}

#[wasm_bindgen_test]
fn element_by_id_checks_type() {
    let document = dom::window_document().unwrap();
    fresh_div(&document, "typed-probe");
    assert!(dom::element_by_id::<web_sys::HtmlElement>(&document, "typed-probe").is_ok());
    assert!(dom::element_by_id::<web_sys::HtmlCanvasElement>(&document, "typed-probe").is_err());
    assert!(dom::element_by_id::<web_sys::HtmlElement>(&document, "no-such-id").is_err());
}

#[wasm_bindgen_test]
fn body_class_toggles() {
    let document = dom::window_document().unwrap();
    dom::set_body_class(&document, "backdrop-dim", true);
    assert!(document.body().unwrap().class_list().contains("backdrop-dim"));
    dom::set_body_class(&document, "backdrop-dim", false);
    assert!(!document.body().unwrap().class_list().contains("backdrop-dim"));
}

async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
    });
    JsFuture::from(promise).await.unwrap();
}

/// Fixed strip `height` px tall starting `top` px below the top of the viewport.
fn fixed_section(document: &web_sys::Document, id: &str, top: &str, height: u32) -> web_sys::HtmlElement {
    let el = fresh_div(document, id);
    let style = el.style();
    style.set_property("position", "fixed").unwrap();
    style.set_property("left", "0").unwrap();
    style.set_property("width", "100px").unwrap();
    style.set_property("top", top).unwrap();
    style.set_property("height", &format!("{height}px")).unwrap();
    el
}

#[wasm_bindgen_test]
fn js_stack_is_captured() {
    assert!(!dom::js_stack().is_empty());
}

#[wasm_bindgen_test]
async fn observer_reports_sections_above_threshold_until_dropped() {
    let document = dom::window_document().unwrap();
    let sections = [
        fixed_section(&document, "hero", "0px", 50),
        // Only 5 of 100 px on screen: intersecting, but under the threshold
        fixed_section(&document, "journey", "calc(100vh - 5px)", 100),
        fixed_section(&document, "projects", "200vh", 50),
    ];

    // Dropped before the browser computes the first intersections
    let (tx, rx) = section_channel();
    drop(observer::VisibilityObserver::observe(&document, tx, 0.2).unwrap());
    sleep_ms(200).await;
    assert_eq!(rx.try_recv(), None);

    let (tx, rx) = section_channel();
    let live = observer::VisibilityObserver::observe(&document, tx, 0.2).unwrap();
    sleep_ms(200).await;
    let mut seen = Vec::new();
    while let Some(s) = rx.try_recv() {
        seen.push(s);
    }
    assert_eq!(seen, vec![SectionId::Hero]);

    drop(live);
    sections[2].style().set_property("top", "0px").unwrap();
    sleep_ms(200).await;
    assert_eq!(rx.try_recv(), None);

    for el in sections {
        el.remove();
    }
}

#[wasm_bindgen_test]
async fn cancelled_loop_stops_and_releases_its_closure() {
    let count = Rc::new(Cell::new(0u32));
    let counter = count.clone();
    let handle = frame_loop::start_loop(move |_ts| counter.set(counter.get() + 1));
    sleep_ms(200).await;
    assert!(count.get() > 0, "loop never ticked");
    assert_eq!(Rc::strong_count(&count), 2);

    handle.cancel();
    let stopped_at = count.get();
    assert_eq!(Rc::strong_count(&count), 1, "frame closure still alive");
    sleep_ms(200).await;
    assert_eq!(count.get(), stopped_at);
}
