use folio_core::{SectionId, SectionSender};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Feeds "section became visible" events into the variant channel.
///
/// Dropping the observer unobserves every section and disconnects it, so
/// a failure part-way through construction cannot leak the handle.
pub struct VisibilityObserver {
    observer: web::IntersectionObserver,
    targets: Vec<web::Element>,
    _callback: EntriesCallback,
}

impl VisibilityObserver {
    pub fn observe(
        document: &web::Document,
        sender: SectionSender,
        threshold: f64,
    ) -> anyhow::Result<Self> {
        let callback: EntriesCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    // Sections on their way out still intersect below the threshold
                    if !entry.is_intersecting() || entry.intersection_ratio() < threshold {
                        continue;
                    }
                    if let Some(section) = SectionId::from_element_id(&entry.target().id()) {
                        sender.send(section);
                    }
                }
            },
        ) as Box<dyn FnMut(_, _)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;

        let mut this = Self {
            observer,
            targets: Vec::with_capacity(SectionId::ALL.len()),
            _callback: callback,
        };
        for section in SectionId::ALL {
            match document.get_element_by_id(section.element_id()) {
                Some(el) => {
                    this.observer.observe(&el);
                    this.targets.push(el);
                }
                None => log::warn!("[variant] section #{} not found", section.element_id()),
            }
        }
        log::info!(
            "[variant] observing {} sections at threshold {threshold}",
            this.targets.len()
        );
        Ok(this)
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        for el in &self.targets {
            self.observer.unobserve(el);
        }
        self.observer.disconnect();
    }
}
