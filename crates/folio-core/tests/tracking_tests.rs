// Host-side tests for the hand-tracking lifecycle and rotation mapping.

use folio_core::constants::ROTATION_GAIN;
use folio_core::*;
use glam::Vec2;
use std::f32::consts::PI;

/// Detector that returns a scripted hand position and counts invocations.
struct ScriptedDetector {
    hand: Option<(f32, f32)>,
    fail: bool,
    calls: usize,
}

impl ScriptedDetector {
    fn with_hand(x: f32, y: f32) -> Self {
        Self {
            hand: Some((x, y)),
            fail: false,
            calls: 0,
        }
    }
}

impl HandDetector for ScriptedDetector {
    fn detect(&mut self, _timestamp_ms: f64) -> Result<Option<Vec<Landmark>>, FolioError> {
        self.calls += 1;
        if self.fail {
            return Err(FolioError::DetectionRuntimeError("graph error".into()));
        }
        Ok(self.hand.map(|(x, y)| {
            (0..21)
                .map(|i| {
                    if i == 9 {
                        Landmark { x, y, z: 0.0 }
                    } else {
                        Landmark {
                            x: 0.0,
                            y: 0.0,
                            z: 0.0,
                        }
                    }
                })
                .collect()
        }))
    }
}

fn tracking() -> (HandTracker, Token) {
    let mut t = HandTracker::new(ROTATION_GAIN);
    let token = t.mount();
    assert!(t.capability_loaded(token));
    assert!(t.camera_live(token));
    assert_eq!(*t.state(), TrackerState::Tracking);
    (t, token)
}

#[test]
fn center_maps_to_no_rotation() {
    let r = rotation_from_landmark(Vec2::new(0.5, 0.5), ROTATION_GAIN);
    assert_eq!(r, CubeRotation::ZERO);
}

#[test]
fn edges_map_to_two_pi() {
    let right = rotation_from_landmark(Vec2::new(1.0, 0.5), ROTATION_GAIN);
    assert!((right.yaw - 2.0 * PI).abs() < 1e-5);
    let left = rotation_from_landmark(Vec2::new(0.0, 0.5), ROTATION_GAIN);
    assert!((left.yaw + 2.0 * PI).abs() < 1e-5);
    let bottom = rotation_from_landmark(Vec2::new(0.5, 1.0), ROTATION_GAIN);
    assert!((bottom.pitch - 2.0 * PI).abs() < 1e-5);
    assert_eq!(bottom.yaw, 0.0);
}

#[test]
fn hand_center_uses_palm_landmark() {
    let mut d = ScriptedDetector::with_hand(0.25, 0.75);
    let lms = d.detect(0.0).unwrap().unwrap();
    assert_eq!(hand_center(&lms), Some(Vec2::new(0.25, 0.75)));
    assert_eq!(hand_center(&lms[..5]), None);
}

#[test]
fn lifecycle_walks_through_states() {
    let mut t = HandTracker::new(ROTATION_GAIN);
    assert_eq!(*t.state(), TrackerState::Uninitialized);
    let token = t.mount();
    assert_eq!(*t.state(), TrackerState::Initializing);
    // Camera cannot go live before the capability is loaded.
    assert!(!t.camera_live(token));
    assert!(t.capability_loaded(token));
    assert_eq!(*t.state(), TrackerState::CameraRequested);
    assert!(t.state().shows_placeholder());
    assert!(t.camera_live(token));
    assert!(!t.state().shows_placeholder());
}

#[test]
fn permission_denied_moves_to_error() {
    let mut t = HandTracker::new(ROTATION_GAIN);
    let token = t.mount();
    t.capability_loaded(token);
    assert!(t.fail(token, FolioError::CameraPermissionDenied("NotAllowedError".into())));
    assert!(matches!(t.state(), TrackerState::Error(FolioError::CameraPermissionDenied(_))));
    let mut d = ScriptedDetector::with_hand(1.0, 1.0);
    assert_eq!(t.poll(token, 0.1, 0.0, &mut d), None);
    assert_eq!(d.calls, 0);
}

#[test]
fn detection_runs_once_per_video_frame() {
    let (mut t, token) = tracking();
    let mut d = ScriptedDetector::with_hand(1.0, 0.5);
    let first = t.poll(token, 0.033, 10.0, &mut d);
    assert!(first.is_some());
    // Same video timestamp on the next animation frame: no detection.
    assert_eq!(t.poll(token, 0.033, 26.0, &mut d), None);
    assert_eq!(d.calls, 1);
    assert!(t.poll(token, 0.066, 42.0, &mut d).is_some());
    assert_eq!(d.calls, 2);
}

#[test]
fn missing_hand_keeps_previous_target() {
    let (mut t, token) = tracking();
    let mut easer = RotationEaser::new(0.1);
    let mut d = ScriptedDetector::with_hand(1.0, 0.5);
    if let Some(target) = t.poll(token, 0.01, 0.0, &mut d) {
        easer.set_target(target);
    }
    d.hand = None;
    if let Some(target) = t.poll(token, 0.02, 16.0, &mut d) {
        easer.set_target(target);
    }
    assert!((easer.target.yaw - 2.0 * PI).abs() < 1e-5);
}

#[test]
fn detection_error_is_absorbed() {
    let (mut t, token) = tracking();
    let mut d = ScriptedDetector::with_hand(0.5, 0.5);
    d.fail = true;
    assert_eq!(t.poll(token, 0.01, 0.0, &mut d), None);
    assert_eq!(*t.state(), TrackerState::Tracking);
    d.fail = false;
    assert_eq!(t.poll(token, 0.02, 16.0, &mut d), Some(CubeRotation::ZERO));
}

#[test]
fn completions_after_teardown_are_discarded() {
    let mut t = HandTracker::new(ROTATION_GAIN);
    let token = t.mount();
    t.teardown();
    assert!(!t.capability_loaded(token));
    assert!(!t.fail(token, FolioError::CapabilityLoadFailure("late".into())));
    assert_eq!(*t.state(), TrackerState::Uninitialized);

    // A remount issues a fresh token; the old one stays dead.
    let fresh = t.mount();
    assert_ne!(fresh, token);
    assert!(!t.capability_loaded(token));
    assert!(t.capability_loaded(fresh));
}

#[test]
fn no_rotation_applied_after_teardown() {
    let (mut t, token) = tracking();
    t.teardown();
    let mut d = ScriptedDetector::with_hand(1.0, 1.0);
    assert_eq!(t.poll(token, 0.5, 0.0, &mut d), None);
    assert_eq!(d.calls, 0);
}

#[test]
fn easer_approaches_target() {
    let mut e = RotationEaser::new(0.1);
    e.set_target(CubeRotation {
        pitch: 1.0,
        yaw: -1.0,
    });
    let first = e.step();
    assert!((first.pitch - 0.1).abs() < 1e-6);
    assert!((first.yaw + 0.1).abs() < 1e-6);
    for _ in 0..200 {
        e.step();
    }
    assert!((e.current.pitch - 1.0).abs() < 1e-4);
    assert!((e.current.yaw + 1.0).abs() < 1e-4);
}
