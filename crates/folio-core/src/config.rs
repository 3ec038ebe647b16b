//! Runtime-tunable "feel" parameters.
//!
//! The easing factors and the rotation gain were chosen by eye rather than
//! derived, so they are carried as data instead of being baked into the
//! state machines. The web frontend may override them from `data-*`
//! attributes on the canvas.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tuning {
    pub opacity_smoothing: f32,
    pub pointer_smoothing: f32,
    pub rotation_smoothing: f32,
    pub rotation_gain: f32,
    pub visibility_threshold: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            opacity_smoothing: OPACITY_SMOOTHING,
            pointer_smoothing: POINTER_SMOOTHING,
            rotation_smoothing: ROTATION_SMOOTHING,
            rotation_gain: ROTATION_GAIN,
            visibility_threshold: VISIBILITY_THRESHOLD,
        }
    }
}

impl Tuning {
    /// Clamp every field into the range the easing steps are stable for.
    ///
    /// Smoothing factors are held to `MIN_SMOOTHING..=1`; smaller ones make
    /// each step round to nothing and snap, larger ones overshoot. Non-positive
    /// and non-finite values fall back to the defaults.
    pub fn sanitized(self) -> Self {
        let d = Self::default();
        Self {
            opacity_smoothing: clamp_factor(self.opacity_smoothing, d.opacity_smoothing),
            pointer_smoothing: clamp_factor(self.pointer_smoothing, d.pointer_smoothing),
            rotation_smoothing: clamp_factor(self.rotation_smoothing, d.rotation_smoothing),
            rotation_gain: if self.rotation_gain.is_finite() {
                self.rotation_gain
            } else {
                d.rotation_gain
            },
            visibility_threshold: if self.visibility_threshold.is_finite() {
                self.visibility_threshold.clamp(0.0, 1.0)
            } else {
                d.visibility_threshold
            },
        }
    }

    /// Apply a single `key=value` override. Returns `false` for unknown keys
    /// or values that do not parse.
    pub fn apply_override(&mut self, key: &str, value: &str) -> bool {
        let Ok(v) = value.trim().parse::<f64>() else {
            return false;
        };
        match key {
            "opacity-smoothing" => self.opacity_smoothing = v as f32,
            "pointer-smoothing" => self.pointer_smoothing = v as f32,
            "rotation-smoothing" => self.rotation_smoothing = v as f32,
            "rotation-gain" => self.rotation_gain = v as f32,
            "visibility-threshold" => self.visibility_threshold = v,
            _ => return false,
        }
        true
    }

    pub const OVERRIDE_KEYS: [&'static str; 5] = [
        "opacity-smoothing",
        "pointer-smoothing",
        "rotation-smoothing",
        "rotation-gain",
        "visibility-threshold",
    ];
}

fn clamp_factor(v: f32, fallback: f32) -> f32 {
    if !v.is_finite() || v <= 0.0 {
        fallback
    } else {
        v.clamp(MIN_SMOOTHING, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_clamps_out_of_range_factors() {
        let t = Tuning {
            opacity_smoothing: 2.0,
            pointer_smoothing: -1.0,
            rotation_smoothing: f32::NAN,
            rotation_gain: f32::INFINITY,
            visibility_threshold: 1.5,
        }
        .sanitized();
        assert_eq!(t.opacity_smoothing, 1.0);
        assert_eq!(t.pointer_smoothing, POINTER_SMOOTHING);
        assert_eq!(t.rotation_smoothing, ROTATION_SMOOTHING);
        assert_eq!(t.rotation_gain, ROTATION_GAIN);
        assert_eq!(t.visibility_threshold, 1.0);
    }

    #[test]
    fn tiny_smoothing_is_floored_not_a_hard_cut() {
        let t = Tuning {
            opacity_smoothing: 1e-9,
            ..Tuning::default()
        }
        .sanitized();
        assert_eq!(t.opacity_smoothing, MIN_SMOOTHING);

        // A layer fading in at the floor is still far from its target after one tick.
        let first = crate::layer::ease_toward(0.0, 1.0, t.opacity_smoothing);
        assert!(first > 0.0 && first < 0.01, "{first}");
    }

    #[test]
    fn overrides_parse_known_keys_only() {
        let mut t = Tuning::default();
        assert!(t.apply_override("rotation-gain", " 6.0 "));
        assert_eq!(t.rotation_gain, 6.0);
        assert!(!t.apply_override("rotation-gain", "fast"));
        assert!(!t.apply_override("zoom", "1.0"));
        assert_eq!(t.rotation_gain, 6.0);
    }
}
