use crate::error::FolioError;
use crate::variant::BackgroundVariant;

/// One exponential-smoothing step: move `current` a fixed fraction toward `target`.
///
/// Once `current` is within floating-point distance of `target` the step
/// returns `current` unchanged.
#[inline]
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    let next = current + (target - current) * factor;
    if next == current {
        target
    } else {
        next
    }
}

#[inline]
pub fn ease_toward2(current: [f32; 2], target: [f32; 2], factor: f32) -> [f32; 2] {
    [
        ease_toward(current[0], target[0], factor),
        ease_toward(current[1], target[1], factor),
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
    /// Procedural fragment shader over a still image.
    FluidImage,
    /// Looping video texture.
    Video,
}

#[derive(Clone, Debug)]
pub struct LayerSpec {
    pub id: &'static str,
    pub variant: BackgroundVariant,
    pub kind: LayerKind,
    pub source: &'static str,
}

pub const DEFAULT_LAYERS: [LayerSpec; 3] = [
    LayerSpec {
        id: "fluid",
        variant: BackgroundVariant::Default,
        kind: LayerKind::FluidImage,
        source: "assets/bg-dark-splash.png",
    },
    LayerSpec {
        id: "journey",
        variant: BackgroundVariant::Journey,
        kind: LayerKind::Video,
        source: "assets/journey_bg.mp4",
    },
    LayerSpec {
        id: "cave",
        variant: BackgroundVariant::Cave,
        kind: LayerKind::Video,
        source: "assets/flower_cave.mp4",
    },
];

/// Opacity state for one layer. The compositor tick is the only writer.
#[derive(Clone, Debug)]
pub struct LayerState {
    pub spec: LayerSpec,
    opacity: f32,
    target: f32,
}

impl LayerState {
    /// Layers start transparent and fade in on their first selected frames.
    pub fn new(spec: LayerSpec) -> Self {
        Self {
            spec,
            opacity: 0.0,
            target: 0.0,
        }
    }

    pub fn with_opacity(spec: LayerSpec, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        Self {
            spec,
            opacity,
            target: opacity,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_selected(&self, selected: BackgroundVariant) -> bool {
        self.spec.variant == selected
    }

    pub fn tick(&mut self, selected: BackgroundVariant, smoothing: f32) -> f32 {
        self.target = if self.is_selected(selected) { 1.0 } else { 0.0 };
        self.opacity = ease_toward(self.opacity, self.target, smoothing).clamp(0.0, 1.0);
        self.opacity
    }
}

/// Pointer and clock uniforms for the fluid shader layer.
#[derive(Clone, Copy, Debug)]
pub struct ShaderInputs {
    pub time: f32,
    pub pointer: [f32; 2],
    pub resolution: [f32; 2],
}

impl Default for ShaderInputs {
    fn default() -> Self {
        Self {
            time: 0.0,
            pointer: [0.5, 0.5],
            resolution: [1.0, 1.0],
        }
    }
}

impl ShaderInputs {
    /// Advance the clock and ease the pointer. Resolution is taken as given
    /// every frame since the viewport can change without a remount.
    pub fn step(&mut self, elapsed_sec: f32, pointer_uv: [f32; 2], resolution: [f32; 2], smoothing: f32) {
        self.time = elapsed_sec.max(self.time);
        self.pointer = ease_toward2(self.pointer, pointer_uv, smoothing);
        self.resolution = [resolution[0].max(1.0), resolution[1].max(1.0)];
    }
}

/// Minimal control over a media element backing a video layer.
pub trait PlaybackControl {
    fn is_paused(&self) -> bool;
    fn play(&mut self) -> Result<(), FolioError>;
    fn pause(&mut self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackAction {
    None,
    Play,
    Pause,
}

/// What the media element of a layer should do this frame.
pub fn playback_action(selected: bool, paused: bool) -> PlaybackAction {
    match (selected, paused) {
        (true, true) => PlaybackAction::Play,
        (false, false) => PlaybackAction::Pause,
        _ => PlaybackAction::None,
    }
}

/// Keep `media` advancing only while its layer is selected.
///
/// A rejected play is reported back and leaves the layer visible on its
/// current frame; the caller decides whether to log it.
pub fn sync_playback<P: PlaybackControl + ?Sized>(
    media: &mut P,
    selected: bool,
) -> Result<PlaybackAction, FolioError> {
    let action = playback_action(selected, media.is_paused());
    match action {
        PlaybackAction::Play => media.play()?,
        PlaybackAction::Pause => media.pause(),
        PlaybackAction::None => {}
    }
    Ok(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_toward_settles_exactly() {
        let mut v = 0.0_f32;
        for _ in 0..2000 {
            v = ease_toward(v, 1.0, 0.05);
        }
        assert_eq!(v, 1.0);
        assert_eq!(ease_toward(v, 1.0, 0.05), 1.0);
    }

    #[test]
    fn playback_action_table() {
        assert_eq!(playback_action(true, true), PlaybackAction::Play);
        assert_eq!(playback_action(true, false), PlaybackAction::None);
        assert_eq!(playback_action(false, false), PlaybackAction::Pause);
        assert_eq!(playback_action(false, true), PlaybackAction::None);
    }

    #[test]
    fn shader_pointer_eases_from_center() {
        let mut s = ShaderInputs::default();
        s.step(0.016, [1.0, 0.5], [800.0, 600.0], 0.1);
        assert!((s.pointer[0] - 0.55).abs() < 1e-6);
        assert_eq!(s.pointer[1], 0.5);
        assert_eq!(s.resolution, [800.0, 600.0]);
    }
}
