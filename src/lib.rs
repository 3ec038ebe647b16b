#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::frame::FrameContext;
use crate::input::PointerState;
use crate::media::LayerSource;
use crate::observer::VisibilityObserver;
use crate::render::BackgroundRenderer;
use crate::widget::{CubeWidget, WidgetElements};
use folio_core::{
    section_channel, Compositor, CubeModel, LayerKind, VariantController, DEFAULT_LAYERS, PROJECTS,
};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod config;
mod constants;
mod dom;
mod events;
mod fallback;
mod frame;
mod frame_loop;
mod input;
mod landmarker;
mod media;
mod observer;
mod overlay;
mod render;
mod webcam;
mod widget;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    fallback::install_panic_hook();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            fallback::report(&format!("init error: {:?}", e));
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let bg_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, BACKGROUND_CANVAS_ID)?;
    let cube_canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CUBE_CANVAS_ID)?;
    let elements = WidgetElements {
        document: document.clone(),
        canvas: cube_canvas.clone(),
        webcam: dom::element_by_id(&document, WEBCAM_VIDEO_ID)?,
        placeholder: dom::element_by_id(&document, CAMERA_PLACEHOLDER_ID)?,
        popup: dom::element_by_id(&document, PROJECT_POPUP_ID)?,
    };

    let tuning = config::tuning_from_element(&bg_canvas);

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    events::wire_canvas_resize(&bg_canvas, MAX_BACKGROUND_DPR);
    events::wire_canvas_resize(&cube_canvas, MAX_CUBE_DPR);

    let (gpu, bg_target, cube_target) = render::init(&bg_canvas, &cube_canvas).await?;

    // ---------------- Background ----------------
    let (sections_tx, sections_rx) = section_channel();
    let observer = VisibilityObserver::observe(&document, sections_tx, tuning.visibility_threshold)?;
    let sources = DEFAULT_LAYERS
        .iter()
        .map(|spec| LayerSource::for_spec(&document, spec))
        .collect::<anyhow::Result<Vec<_>>>()?;
    let kinds: Vec<LayerKind> = DEFAULT_LAYERS.iter().map(|s| s.kind).collect();
    let renderer = BackgroundRenderer::new(&gpu, bg_target.format(), &kinds, CLEAR_COLOR);

    let pointer = Rc::new(RefCell::new(PointerState::default()));
    events::wire_background_pointer(pointer.clone());

    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        gpu: gpu.clone(),
        target: bg_target,
        renderer,
        canvas: bg_canvas,
        document: document.clone(),
        controller: VariantController::new(sections_rx),
        compositor: Compositor::with_default_layers(tuning),
        sources,
        pointer,
        started: Instant::now(),
        dimmed: None,
        _observer: observer,
    }));
    // Background loop runs for the lifetime of the page
    let _ = frame_loop::start_loop(move |_ts| frame_ctx.borrow_mut().frame());

    // ---------------- Cube ----------------
    let model = CubeModel::build(PROJECTS, &mut rand::thread_rng());
    let widget = Rc::new(RefCell::new(CubeWidget::new(
        gpu,
        cube_target,
        elements,
        PROJECTS,
        model,
        &tuning,
    )));
    events::wire_cube_pointer(&cube_canvas, widget.clone());
    events::wire_pagehide(widget.clone());
    events::wire_pageshow(widget.clone());
    widget::mount(&widget);

    Ok(())
}
