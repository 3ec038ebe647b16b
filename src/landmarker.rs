use folio_core::constants::{HAND_DELEGATE, HAND_MODEL_URL, MAX_HANDS, VISION_WASM_ROOT};
use folio_core::{FolioError, HandDetector, Landmark};
use wasm_bindgen::prelude::*;
use web_sys as web;

const VISION_MODULE_URL: &str = "https://cdn.jsdelivr.net/npm/@mediapipe/tasks-vision@0.10.0/+esm";

// Thin shim over the MediaPipe tasks-vision hand landmarker. Landmarks of
// the first hand come back flattened as [x0, y0, z0, x1, ...].
#[wasm_bindgen(inline_js = "
export async function folio_create_hand_landmarker(moduleUrl, wasmRoot, modelPath, delegate, numHands) {
    const { FilesetResolver, HandLandmarker } = await import(moduleUrl);
    const vision = await FilesetResolver.forVisionTasks(wasmRoot);
    return await HandLandmarker.createFromOptions(vision, {
        baseOptions: { modelAssetPath: modelPath, delegate },
        runningMode: 'VIDEO',
        numHands,
    });
}

export function folio_detect_hand(landmarker, video, timestampMs) {
    const result = landmarker.detectForVideo(video, timestampMs);
    if (!result || !result.landmarks || result.landmarks.length === 0) {
        return null;
    }
    const hand = result.landmarks[0];
    const out = new Float32Array(hand.length * 3);
    for (let i = 0; i < hand.length; i++) {
        out[i * 3] = hand[i].x;
        out[i * 3 + 1] = hand[i].y;
        out[i * 3 + 2] = hand[i].z;
    }
    return out;
}

export function folio_close_hand_landmarker(landmarker) {
    try {
        landmarker.close();
    } catch (e) {
        console.warn('hand landmarker close failed', e);
    }
}
")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn folio_create_hand_landmarker(
        module_url: &str,
        wasm_root: &str,
        model_path: &str,
        delegate: &str,
        num_hands: u32,
    ) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    fn folio_detect_hand(
        landmarker: &JsValue,
        video: &web::HtmlVideoElement,
        timestamp_ms: f64,
    ) -> Result<Option<js_sys::Float32Array>, JsValue>;

    fn folio_close_hand_landmarker(landmarker: &JsValue);
}

/// Loaded hand landmarker bound to the webcam preview element.
/// Its model and GPU resources are released on drop.
pub struct HandLandmarker {
    handle: JsValue,
    video: web::HtmlVideoElement,
}

impl HandLandmarker {
    pub async fn load(video: web::HtmlVideoElement) -> Result<Self, FolioError> {
        let handle = folio_create_hand_landmarker(
            VISION_MODULE_URL,
            VISION_WASM_ROOT,
            HAND_MODEL_URL,
            HAND_DELEGATE,
            MAX_HANDS,
        )
        .await
        .map_err(|e| FolioError::CapabilityLoadFailure(format!("{:?}", e)))?;
        log::info!("[tracking] hand landmarker ready ({HAND_DELEGATE})");
        Ok(Self { handle, video })
    }
}

impl HandDetector for HandLandmarker {
    fn detect(&mut self, timestamp_ms: f64) -> Result<Option<Vec<Landmark>>, FolioError> {
        let flat = folio_detect_hand(&self.handle, &self.video, timestamp_ms)
            .map_err(|e| FolioError::DetectionRuntimeError(format!("{:?}", e)))?;
        Ok(flat.map(|arr| {
            arr.to_vec()
                .chunks_exact(3)
                .map(|p| Landmark {
                    x: p[0],
                    y: p[1],
                    z: p[2],
                })
                .collect()
        }))
    }
}

impl Drop for HandLandmarker {
    fn drop(&mut self) {
        folio_close_hand_landmarker(&self.handle);
        log::info!("[tracking] hand landmarker closed");
    }
}
