use std::f32::consts::PI;

// Shared tuning constants used by the core state machines and the web frontend.

// Easing ("feel") factors, applied once per rendered frame
pub const OPACITY_SMOOTHING: f32 = 0.05; // layer crossfade, ~1s to 95% at 60 fps
pub const POINTER_SMOOTHING: f32 = 0.1; // shader pointer uniform
pub const ROTATION_SMOOTHING: f32 = 0.1; // cube pitch/yaw lerp
pub const MIN_SMOOTHING: f32 = 1e-3; // below this a step can round to zero and snap

// Hand position -> cube rotation
pub const ROTATION_GAIN: f32 = PI * 4.0; // radians per unit of normalized offset from center
pub const HAND_CENTER_LANDMARK: usize = 9; // middle finger MCP, a stable palm-center point

// Fraction of a section's height that must be visible before it becomes current
pub const VISIBILITY_THRESHOLD: f64 = 0.2;

// Opacity considered "not drawn" by the compositor
pub const OPACITY_EPSILON: f32 = 1e-3;

// Cube geometry (world units)
pub const CUBELET_SIZE: f32 = 1.0;
pub const CUBELET_SPACING: f32 = 0.02;
pub const STICKER_SIZE: f32 = 0.85; // leaves a dark border around each sticker
pub const STICKER_OFFSET: f32 = 0.51; // slightly above the cubelet face

// Sticker emissive intensities
pub const EMISSIVE_PROJECT_IDLE: f32 = 0.3;
pub const EMISSIVE_PROJECT_HOVER: f32 = 0.6;

// Colors
pub const CUBELET_BODY_COLOR: [f32; 3] = [0.067, 0.067, 0.067]; // #111111
pub const PALETTE: [[f32; 3]; 6] = [
    [0.725, 0.0, 0.0],   // right, red #B90000
    [1.0, 0.349, 0.0],   // left, orange #FF5900
    [1.0, 1.0, 1.0],     // top, white #FFFFFF
    [1.0, 0.835, 0.0],   // bottom, yellow #FFD500
    [0.0, 0.620, 0.376], // front, green #009E60
    [0.0, 0.271, 0.678], // back, blue #0045AD
];

// Cameras
pub const CUBE_CAMERA_Z: f32 = 6.0;
pub const CUBE_FOV_Y: f32 = PI / 4.0;

// Cube lighting: ambient term plus one point light
pub const AMBIENT_LIGHT: f32 = 0.5;
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];

// Hand landmark capability
pub const VISION_WASM_ROOT: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/tasks-vision@0.10.0/wasm";
pub const HAND_MODEL_URL: &str = "https://storage.googleapis.com/mediapipe-models/hand_landmarker/hand_landmarker/float16/1/hand_landmarker.task";
pub const HAND_DELEGATE: &str = "GPU";
pub const MAX_HANDS: u32 = 1;
