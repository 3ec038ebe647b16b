use crate::constants::HAVE_CURRENT_DATA;
use folio_core::{FolioError, LayerKind, LayerSpec, PlaybackControl};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Off-DOM `<video>` backing a background layer.
///
/// Every source is created and preloaded at mount so it has decoded data by
/// the time its variant is selected; playback itself is driven per frame.
pub struct VideoSource {
    layer: &'static str,
    el: web::HtmlVideoElement,
    rejected: Rc<Cell<bool>>,
}

impl VideoSource {
    pub fn create(document: &web::Document, layer: &'static str, src: &str) -> anyhow::Result<Self> {
        let el = document
            .create_element("video")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlVideoElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_muted(true);
        el.set_loop(true);
        el.set_cross_origin(Some("anonymous"));
        el.set_preload("auto");
        _ = el.set_attribute("playsinline", "");
        el.set_src(src);
        el.load();
        log::info!("[video] {layer}: preloading {src}");
        Ok(Self {
            layer,
            el,
            rejected: Rc::new(Cell::new(false)),
        })
    }

    pub fn element(&self) -> &web::HtmlVideoElement {
        &self.el
    }

    pub fn has_current_data(&self) -> bool {
        self.el.ready_state() >= HAVE_CURRENT_DATA && self.el.video_width() > 0
    }

    /// Allow another play attempt after an autoplay rejection. Called once the
    /// layer is no longer selected, so reselecting it retries.
    pub fn clear_rejection(&self) {
        self.rejected.set(false);
    }
}

impl PlaybackControl for VideoSource {
    fn is_paused(&self) -> bool {
        self.el.paused()
    }

    fn play(&mut self) -> Result<(), FolioError> {
        if self.rejected.get() {
            // Frozen on the last frame until the layer is deselected.
            return Ok(());
        }
        let promise = self.el.play().map_err(|e| FolioError::VideoPlaybackRejected {
            layer: self.layer.to_string(),
            reason: format!("{:?}", e),
        })?;
        let rejected = self.rejected.clone();
        let layer = self.layer;
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                rejected.set(true);
                let err = FolioError::VideoPlaybackRejected {
                    layer: layer.to_string(),
                    reason: format!("{:?}", e),
                };
                log::warn!("[video] {err}");
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        _ = self.el.pause();
    }
}

/// `<img>` backing the fluid layer. Decoding runs in the background; the
/// renderer picks the element up exactly once after it is ready.
pub struct ImageSource {
    el: web::HtmlImageElement,
    ready: Rc<Cell<bool>>,
    taken: bool,
}

impl ImageSource {
    pub fn load(layer: &'static str, src: &str) -> anyhow::Result<Self> {
        let el = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        el.set_cross_origin(Some("anonymous"));
        el.set_src(src);
        let ready = Rc::new(Cell::new(false));
        let flag = ready.clone();
        let decode = el.decode();
        spawn_local(async move {
            match JsFuture::from(decode).await {
                Ok(_) => {
                    flag.set(true);
                    log::info!("[image] {layer}: decoded");
                }
                Err(e) => log::warn!("[image] {layer}: decode failed: {:?}", e),
            }
        });
        Ok(Self {
            el,
            ready,
            taken: false,
        })
    }

    /// The decoded element, returned once.
    pub fn take_ready(&mut self) -> Option<&web::HtmlImageElement> {
        if self.taken || !self.ready.get() {
            return None;
        }
        self.taken = true;
        Some(&self.el)
    }
}

/// Media behind one background layer.
pub enum LayerSource {
    Image(ImageSource),
    Video(VideoSource),
}

impl LayerSource {
    pub fn for_spec(document: &web::Document, spec: &LayerSpec) -> anyhow::Result<Self> {
        Ok(match spec.kind {
            LayerKind::FluidImage => LayerSource::Image(ImageSource::load(spec.id, spec.source)?),
            LayerKind::Video => {
                LayerSource::Video(VideoSource::create(document, spec.id, spec.source)?)
            }
        })
    }
}
