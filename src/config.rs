use crate::constants::TUNING_ATTR_PREFIX;
use folio_core::Tuning;
use web_sys as web;

/// Read `data-*` tuning overrides from `el`, e.g.
/// `<canvas data-rotation-gain="6.28">`. Bad values are logged and skipped.
pub fn tuning_from_element(el: &web::Element) -> Tuning {
    let mut tuning = Tuning::default();
    for key in Tuning::OVERRIDE_KEYS {
        let attr = format!("{TUNING_ATTR_PREFIX}{key}");
        if let Some(value) = el.get_attribute(&attr) {
            if tuning.apply_override(key, &value) {
                log::info!("[config] {attr}={value}");
            } else {
                log::warn!("[config] ignoring {attr}={value:?}");
            }
        }
    }
    tuning.sanitized()
}
