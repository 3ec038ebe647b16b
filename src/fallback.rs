use crate::dom;
use crate::overlay;
use std::panic;
use std::sync::Once;

/// Show the fallback panel for an unrecoverable error.
pub fn report(message: &str) {
    log::error!("[fallback] {message}");
    if let Some(document) = dom::window_document() {
        overlay::show_error_panel(&document, message, &dom::js_stack());
    }
}

/// Chain a panic hook after `console_error_panic_hook` that also renders
/// the panic into the fallback panel.
pub fn install_panic_hook() {
    static SET: Once = Once::new();
    SET.call_once(|| {
        console_error_panic_hook::set_once();
        let console_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            console_hook(info);
            if let Some(document) = dom::window_document() {
                overlay::show_error_panel(&document, &info.to_string(), &dom::js_stack());
            }
        }));
    });
}
