// DOM hooks and page-level constants for the web frontend.
//
// Element ids live here so `index.html` and the Rust side agree in one place.

// Canvases
pub const BACKGROUND_CANVAS_ID: &str = "bg-canvas";
pub const CUBE_CANVAS_ID: &str = "cube-canvas";

// Cube widget chrome
pub const WEBCAM_VIDEO_ID: &str = "webcam";
pub const CAMERA_PLACEHOLDER_ID: &str = "camera-placeholder";
pub const PROJECT_POPUP_ID: &str = "project-popup";

// Fallback boundary
pub const ERROR_PANEL_ID: &str = "error-panel";

// Toggled on <body> while the default variant dims the hero backdrop
pub const BACKDROP_DIM_CLASS: &str = "backdrop-dim";

// Data attribute prefix for tuning overrides on the background canvas
pub const TUNING_ATTR_PREFIX: &str = "data-";

// Background clear color behind every layer
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

// Cube canvas clear color (#0a0a0a)
pub const CUBE_CLEAR_COLOR: [f64; 3] = [0.039, 0.039, 0.039];

// Upper bound on device pixel ratio for the background canvas
pub const MAX_BACKGROUND_DPR: f64 = 1.5;
pub const MAX_CUBE_DPR: f64 = 2.0;

// Placeholder copy while the camera is not yet streaming
pub const CAMERA_LOADING_TEXT: &str = "Loading Camera\u{2026}";
pub const CAMERA_UNAVAILABLE_TEXT: &str = "Camera unavailable";

// Video readiness (HTMLMediaElement.HAVE_CURRENT_DATA)
pub const HAVE_CURRENT_DATA: u16 = 2;
