use folio_core::FolioError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Ask for a video-only camera stream. Denial, missing devices and
/// insecure contexts all come back as `CameraPermissionDenied`.
pub async fn request_camera() -> Result<web::MediaStream, FolioError> {
    let denied = |e: JsValue| FolioError::CameraPermissionDenied(format!("{:?}", e));
    let window = web::window().ok_or_else(|| denied(JsValue::from_str("no window")))?;
    let devices = window.navigator().media_devices().map_err(denied)?;
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);
    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(denied)?;
    let stream = JsFuture::from(promise).await.map_err(denied)?;
    stream.dyn_into::<web::MediaStream>().map_err(denied)
}

/// Bind the stream to the preview element and wait for its first frame.
pub async fn attach(video: &web::HtmlVideoElement, stream: &web::MediaStream) -> Result<(), FolioError> {
    video.set_src_object(Some(stream));
    video.set_muted(true);
    _ = video.set_attribute("playsinline", "");
    let promise = video
        .play()
        .map_err(|e| FolioError::CameraPermissionDenied(format!("{:?}", e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|_| FolioError::CameraStreamLost)?;
    Ok(())
}

/// Stop every track and detach the stream from the preview, unless the
/// preview has already moved on to another stream.
pub fn release(video: &web::HtmlVideoElement, stream: &web::MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<web::MediaStreamTrack>() {
            track.stop();
        }
    }
    if video.src_object().as_ref() == Some(stream) {
        video.set_src_object(None);
    }
    log::info!("[tracking] camera released");
}

pub fn stream_ended(stream: &web::MediaStream) -> bool {
    !stream.active()
}
