use crate::constants::BACKDROP_DIM_CLASS;
use crate::dom;
use crate::input::PointerState;
use crate::media::LayerSource;
use crate::observer::VisibilityObserver;
use crate::render::{BackgroundRenderer, Gpu, GpuState};
use folio_core::{sync_playback, Compositor, FrameInput, VariantController};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Everything the background loop touches once per animation frame.
pub struct FrameContext {
    pub gpu: Rc<Gpu>,
    pub target: GpuState,
    pub renderer: BackgroundRenderer,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,

    pub controller: VariantController,
    pub compositor: Compositor,
    pub sources: Vec<LayerSource>,
    pub pointer: Rc<RefCell<PointerState>>,

    pub started: Instant,
    pub dimmed: Option<bool>,
    // Kept alive for as long as the loop runs
    pub _observer: VisibilityObserver,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let variant = self.controller.pump();

        let dim = variant.backdrop_dimmed();
        if self.dimmed != Some(dim) {
            dom::set_body_class(&self.document, BACKDROP_DIM_CLASS, dim);
            self.dimmed = Some(dim);
        }

        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.target.resize_if_needed(&self.gpu, w, h);
        let frames = self.compositor.tick(
            variant,
            FrameInput {
                elapsed_sec: self.started.elapsed().as_secs_f32(),
                pointer_uv: self.pointer.borrow().uv,
                resolution: [w as f32, h as f32],
            },
        );

        for (i, source) in self.sources.iter_mut().enumerate() {
            match source {
                LayerSource::Image(img) => {
                    if let Some(el) = img.take_ready() {
                        self.renderer.upload_image(&self.gpu, i, el);
                    }
                }
                LayerSource::Video(video) => {
                    let selected = self.compositor.layers()[i].is_selected(variant);
                    if !selected {
                        video.clear_rejection();
                    }
                    if let Err(e) = sync_playback(video, selected) {
                        log::warn!("[video] {e}");
                    }
                    let visible = frames.get(i).is_some_and(|f| f.visible());
                    if visible && video.has_current_data() {
                        self.renderer.refresh_video(&self.gpu, i, video.element());
                    }
                }
            }
        }

        self.renderer.render(&self.gpu, &mut self.target, &frames);
    }
}
