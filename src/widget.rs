//! Hand-tracked project cube.
//!
//! The widget owns its own animation-frame loop: detection, easing, picking
//! and drawing the cube canvas. Model and camera acquisition run as async
//! tasks that report back through the tracker's generation token, so a
//! teardown while they are in flight simply discards their results.

use crate::constants::CUBE_CLEAR_COLOR;
use crate::frame_loop::{start_loop, LoopHandle};
use crate::landmarker::HandLandmarker;
use crate::overlay;
use crate::render::{CubeRenderer, Gpu, GpuState};
use crate::webcam;
use folio_core::{
    pick_cubelet, Camera, CubeModel, FolioError, HandTracker, HoverChange, HoverTracker, Project,
    RotationEaser, Token, TrackerState, Tuning,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub type SharedWidget = Rc<RefCell<CubeWidget>>;

/// DOM pieces the widget drives.
pub struct WidgetElements {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub webcam: web::HtmlVideoElement,
    pub placeholder: web::HtmlElement,
    pub popup: web::HtmlElement,
}

pub struct CubeWidget {
    gpu: Rc<Gpu>,
    target: GpuState,
    renderer: CubeRenderer,
    el: WidgetElements,

    projects: &'static [Project],
    model: CubeModel,
    tracker: HandTracker,
    token: Option<Token>,
    easer: RotationEaser,
    hover: HoverTracker,
    pointer_ndc: Option<[f32; 2]>,

    landmarker: Option<HandLandmarker>,
    stream: Option<web::MediaStream>,
    shown_state: Option<TrackerState>,
    raf: Option<LoopHandle>,
}

impl CubeWidget {
    pub fn new(
        gpu: Rc<Gpu>,
        target: GpuState,
        el: WidgetElements,
        projects: &'static [Project],
        model: CubeModel,
        tuning: &Tuning,
    ) -> Self {
        let sticker_count = model.cubelets.iter().map(|c| c.stickers.len()).sum();
        let renderer = CubeRenderer::new(
            &gpu,
            &target,
            model.cubelets.len(),
            sticker_count,
            CUBE_CLEAR_COLOR,
        );
        Self {
            gpu,
            target,
            renderer,
            el,
            projects,
            model,
            tracker: HandTracker::new(tuning.rotation_gain),
            token: None,
            easer: RotationEaser::new(tuning.rotation_smoothing),
            hover: HoverTracker::default(),
            pointer_ndc: None,
            landmarker: None,
            stream: None,
            shown_state: None,
            raf: None,
        }
    }

    pub fn set_pointer(&mut self, ndc: Option<[f32; 2]>) {
        self.pointer_ndc = ndc;
    }

    /// Stop the loop, release the camera and the landmarker. Any async
    /// step still in flight finds its token stale and backs out.
    pub fn teardown(&mut self) {
        if let Some(raf) = self.raf.take() {
            raf.cancel();
        }
        self.tracker.teardown();
        self.token = None;
        self.landmarker = None;
        if let Some(stream) = self.stream.take() {
            webcam::release(&self.el.webcam, &stream);
        }
        self.hover = HoverTracker::default();
        overlay::hide_project(&self.el.popup);
        self.sync_placeholder();
    }

    fn frame(&mut self, now_ms: f64) {
        self.check_stream();

        if let (Some(token), Some(detector)) = (self.token, self.landmarker.as_mut()) {
            let video_time = self.el.webcam.current_time();
            if let Some(target) = self.tracker.poll(token, video_time, now_ms, detector) {
                self.easer.set_target(target);
            }
        }
        let rotation = self.easer.step();
        self.sync_placeholder();

        let (w, h) = (self.el.canvas.width(), self.el.canvas.height());
        self.target.resize_if_needed(&self.gpu, w, h);
        let camera = Camera::for_cube(w as f32 / h.max(1) as f32);

        let picked = self.pointer_ndc.and_then(|[x, y]| {
            let (ro, rd) = camera.ray_from_ndc(x, y);
            pick_cubelet(ro, rd, &self.model, rotation)
        });
        let model = &self.model;
        if let Some(change) = self.hover.update_pick(picked, |i| model.project_at(i)) {
            self.show_hover(change);
        }

        let instances = self.model.instances(rotation, self.hover.hovered_cell());
        self.renderer
            .render(&self.gpu, &mut self.target, &camera, &instances);
    }

    fn check_stream(&mut self) {
        let (Some(token), Some(stream)) = (self.token, self.stream.as_ref()) else {
            return;
        };
        if webcam::stream_ended(stream) && self.tracker.fail(token, FolioError::CameraStreamLost) {
            if let Some(stream) = self.stream.take() {
                webcam::release(&self.el.webcam, &stream);
            }
        }
    }

    fn show_hover(&self, change: HoverChange) {
        match change.project.and_then(|p| self.projects.get(p)) {
            Some(project) => {
                log::info!("[cube] hover {}", project.id);
                if let Err(e) = overlay::show_project(&self.el.document, &self.el.popup, project) {
                    log::error!("[cube] popup: {:?}", e);
                }
            }
            None => overlay::hide_project(&self.el.popup),
        }
    }

    fn sync_placeholder(&mut self) {
        let state = self.tracker.state();
        if self.shown_state.as_ref() != Some(state) {
            overlay::sync_camera_placeholder(&self.el.placeholder, state);
            self.shown_state = Some(state.clone());
        }
    }
}

/// Start a fresh lifecycle: draw loop now, model and camera in the background.
pub fn mount(widget: &SharedWidget) {
    let token = {
        let mut w = widget.borrow_mut();
        let token = w.tracker.mount();
        w.token = Some(token);
        w.sync_placeholder();
        token
    };
    let looped = widget.clone();
    let raf = start_loop(move |ts| looped.borrow_mut().frame(ts));
    widget.borrow_mut().raf = Some(raf);
    spawn_local(acquire(widget.clone(), token));
}

async fn acquire(widget: SharedWidget, token: Token) {
    let video = widget.borrow().el.webcam.clone();

    let loaded = HandLandmarker::load(video.clone()).await;
    {
        let mut w = widget.borrow_mut();
        match loaded {
            // A stale landmarker is dropped, and closed, right here.
            Ok(detector) if w.tracker.capability_loaded(token) => w.landmarker = Some(detector),
            Ok(_) => return,
            Err(e) => {
                w.tracker.fail(token, e);
                return;
            }
        }
    }

    let stream = match webcam::request_camera().await {
        Ok(s) => s,
        Err(e) => {
            widget.borrow_mut().tracker.fail(token, e);
            return;
        }
    };
    if !widget.borrow().tracker.is_live(token) {
        webcam::release(&video, &stream);
        return;
    }

    let attached = webcam::attach(&video, &stream).await;
    let mut w = widget.borrow_mut();
    match attached {
        Ok(()) if w.tracker.camera_live(token) => {
            log::info!("[tracking] camera streaming");
            w.stream = Some(stream);
        }
        Ok(()) => webcam::release(&video, &stream),
        Err(e) => {
            webcam::release(&video, &stream);
            w.tracker.fail(token, e);
        }
    }
}
