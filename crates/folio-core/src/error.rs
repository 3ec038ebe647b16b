use thiserror::Error;

/// Failures the page degrades around instead of propagating.
///
/// None of these stop the page: the cube keeps its last rotation, a video
/// layer stays on its last decoded frame, or the camera placeholder stays up.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FolioError {
    #[error("hand landmark capability failed to load: {0}")]
    CapabilityLoadFailure(String),
    #[error("camera permission denied: {0}")]
    CameraPermissionDenied(String),
    #[error("camera stream ended")]
    CameraStreamLost,
    #[error("hand detection failed: {0}")]
    DetectionRuntimeError(String),
    #[error("video playback rejected for layer `{layer}`: {reason}")]
    VideoPlaybackRejected { layer: String, reason: String },
}

impl FolioError {
    /// Short stable label used in log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            FolioError::CapabilityLoadFailure(_) => "capability-load",
            FolioError::CameraPermissionDenied(_) => "camera-permission",
            FolioError::CameraStreamLost => "camera-stream-lost",
            FolioError::DetectionRuntimeError(_) => "detection",
            FolioError::VideoPlaybackRejected { .. } => "video-playback",
        }
    }

    pub fn is_fatal(&self) -> bool {
        false
    }
}
