//! Hand-tracking lifecycle for the cube widget.
//!
//! The two slow steps (loading the landmark model, acquiring the camera) run
//! asynchronously outside the frame loop. Each mount hands out a [`Token`];
//! completions carry it back and are ignored once a teardown or remount has
//! moved the generation on.

use crate::error::FolioError;
use crate::rotation::{hand_center, rotation_from_landmark, CubeRotation, Landmark};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token(u64);

#[derive(Clone, Debug, PartialEq)]
pub enum TrackerState {
    Uninitialized,
    Initializing,
    CameraRequested,
    Tracking,
    Error(FolioError),
}

impl TrackerState {
    /// The camera placeholder stays up until frames are flowing.
    pub fn shows_placeholder(&self) -> bool {
        !matches!(self, TrackerState::Tracking)
    }
}

/// Landmark capability bound to a live video source.
pub trait HandDetector {
    /// Landmarks of the most confident hand in the current frame, if any.
    fn detect(&mut self, timestamp_ms: f64) -> Result<Option<Vec<Landmark>>, FolioError>;
}

pub struct HandTracker {
    state: TrackerState,
    generation: u64,
    last_video_time: Option<f64>,
    gain: f32,
}

impl HandTracker {
    pub fn new(gain: f32) -> Self {
        Self {
            state: TrackerState::Uninitialized,
            generation: 0,
            last_video_time: None,
            gain,
        }
    }

    pub fn state(&self) -> &TrackerState {
        &self.state
    }

    pub fn is_live(&self, token: Token) -> bool {
        token.0 == self.generation && self.state != TrackerState::Uninitialized
    }

    /// Start a new lifecycle; any token from a previous mount goes stale.
    pub fn mount(&mut self) -> Token {
        self.generation += 1;
        self.last_video_time = None;
        self.transition(TrackerState::Initializing);
        Token(self.generation)
    }

    pub fn capability_loaded(&mut self, token: Token) -> bool {
        self.advance(token, TrackerState::Initializing, TrackerState::CameraRequested)
    }

    pub fn camera_live(&mut self, token: Token) -> bool {
        self.advance(token, TrackerState::CameraRequested, TrackerState::Tracking)
    }

    pub fn fail(&mut self, token: Token, err: FolioError) -> bool {
        if !self.is_live(token) {
            log::debug!("[tracking] dropping stale failure: {err}");
            return false;
        }
        log::warn!("[tracking] {} failure: {err}", err.kind());
        self.transition(TrackerState::Error(err));
        true
    }

    pub fn teardown(&mut self) {
        self.generation += 1;
        self.last_video_time = None;
        self.transition(TrackerState::Uninitialized);
    }

    /// Run detection at most once per distinct video frame.
    ///
    /// Returns the new rotation target when a hand was found. When no hand is
    /// visible, or detection fails, the previous target is left in place.
    pub fn poll<D: HandDetector + ?Sized>(
        &mut self,
        token: Token,
        video_time: f64,
        now_ms: f64,
        detector: &mut D,
    ) -> Option<CubeRotation> {
        if !self.is_live(token) || self.state != TrackerState::Tracking {
            return None;
        }
        if self.last_video_time == Some(video_time) {
            return None;
        }
        self.last_video_time = Some(video_time);
        let landmarks = match detector.detect(now_ms) {
            Ok(Some(l)) => l,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("[tracking] {} failure: {e}", e.kind());
                return None;
            }
        };
        hand_center(&landmarks).map(|p| rotation_from_landmark(p, self.gain))
    }

    fn advance(&mut self, token: Token, from: TrackerState, to: TrackerState) -> bool {
        if !self.is_live(token) || self.state != from {
            return false;
        }
        self.transition(to);
        true
    }

    fn transition(&mut self, next: TrackerState) {
        log::info!("[tracking] {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}
