use crate::constants::HAND_CENTER_LANDMARK;
use glam::{Quat, Vec2};

/// Cube orientation in radians. Pitch turns about X, yaw about Y.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CubeRotation {
    pub pitch: f32,
    pub yaw: f32,
}

impl CubeRotation {
    pub const ZERO: CubeRotation = CubeRotation {
        pitch: 0.0,
        yaw: 0.0,
    };

    /// X then Y, matching an XYZ Euler order with no roll.
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_x(self.pitch) * Quat::from_rotation_y(self.yaw)
    }

    pub fn lerp(self, target: CubeRotation, t: f32) -> CubeRotation {
        CubeRotation {
            pitch: self.pitch + (target.pitch - self.pitch) * t,
            yaw: self.yaw + (target.yaw - self.yaw) * t,
        }
    }
}

/// Normalized hand keypoint, x to the right and y downward in image space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Pick the palm-center keypoint out of a full hand.
pub fn hand_center(landmarks: &[Landmark]) -> Option<Vec2> {
    landmarks
        .get(HAND_CENTER_LANDMARK)
        .map(|l| Vec2::new(l.x, l.y))
}

/// Map a normalized image position to a target rotation; the image center
/// maps to no rotation and each edge to `gain / 2` radians.
pub fn rotation_from_landmark(point: Vec2, gain: f32) -> CubeRotation {
    CubeRotation {
        pitch: (point.y - 0.5) * gain,
        yaw: (point.x - 0.5) * gain,
    }
}

/// Eases the rendered rotation toward the latest target once per frame.
#[derive(Clone, Copy, Debug)]
pub struct RotationEaser {
    pub current: CubeRotation,
    pub target: CubeRotation,
    pub factor: f32,
}

impl RotationEaser {
    pub fn new(factor: f32) -> Self {
        Self {
            current: CubeRotation::ZERO,
            target: CubeRotation::ZERO,
            factor,
        }
    }

    pub fn set_target(&mut self, target: CubeRotation) {
        self.target = target;
    }

    pub fn step(&mut self) -> CubeRotation {
        self.current = self.current.lerp(self.target, self.factor);
        self.current
    }
}
