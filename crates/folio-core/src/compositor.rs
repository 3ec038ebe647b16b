//! Per-frame layer model: the variant controller's output goes in, draw
//! parameters for each background layer come out.

use crate::config::Tuning;
use crate::constants::OPACITY_EPSILON;
use crate::layer::{LayerKind, LayerSpec, LayerState, ShaderInputs, DEFAULT_LAYERS};
use crate::variant::BackgroundVariant;

/// Live inputs sampled by the frame loop before the compositor tick.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub elapsed_sec: f32,
    pub pointer_uv: [f32; 2],
    pub resolution: [f32; 2],
}

/// Draw parameters for one layer on one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerFrame {
    pub index: usize,
    pub kind: LayerKind,
    pub opacity: f32,
    pub selected: bool,
    pub time: f32,
    pub pointer: [f32; 2],
    pub resolution: [f32; 2],
}

impl LayerFrame {
    pub fn visible(&self) -> bool {
        self.opacity > OPACITY_EPSILON
    }
}

pub struct Compositor {
    layers: Vec<LayerState>,
    shader: ShaderInputs,
    tuning: Tuning,
}

impl Compositor {
    /// Layers of the initial (default) variant start opaque so the first
    /// frame is not black; every other layer starts transparent.
    pub fn new(specs: impl IntoIterator<Item = LayerSpec>, tuning: Tuning) -> Self {
        let initial = BackgroundVariant::default();
        Self {
            layers: specs
                .into_iter()
                .map(|spec| {
                    if spec.variant == initial {
                        LayerState::with_opacity(spec, 1.0)
                    } else {
                        LayerState::new(spec)
                    }
                })
                .collect(),
            shader: ShaderInputs::default(),
            tuning,
        }
    }

    pub fn with_default_layers(tuning: Tuning) -> Self {
        Self::new(DEFAULT_LAYERS, tuning)
    }

    pub fn layers(&self) -> &[LayerState] {
        &self.layers
    }

    /// Advance every layer one frame toward the selected variant.
    pub fn tick(&mut self, selected: BackgroundVariant, input: FrameInput) -> Vec<LayerFrame> {
        self.shader.step(
            input.elapsed_sec,
            input.pointer_uv,
            input.resolution,
            self.tuning.pointer_smoothing,
        );
        let shader = self.shader;
        let smoothing = self.tuning.opacity_smoothing;
        self.layers
            .iter_mut()
            .enumerate()
            .map(|(index, layer)| {
                let opacity = layer.tick(selected, smoothing);
                LayerFrame {
                    index,
                    kind: layer.spec.kind,
                    opacity,
                    selected: layer.is_selected(selected),
                    time: shader.time,
                    pointer: shader.pointer,
                    resolution: shader.resolution,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> FrameInput {
        FrameInput {
            elapsed_sec: 0.0,
            pointer_uv: [0.5, 0.5],
            resolution: [1280.0, 720.0],
        }
    }

    #[test]
    fn exactly_one_layer_targets_full_opacity() {
        let mut c = Compositor::with_default_layers(Tuning::default());
        for v in BackgroundVariant::ALL {
            let frames = c.tick(v, input());
            assert_eq!(frames.iter().filter(|f| f.selected).count(), 1);
            let full = c.layers().iter().filter(|l| l.target() == 1.0).count();
            assert_eq!(full, 1);
        }
    }

    #[test]
    fn default_layer_starts_opaque_and_others_hidden() {
        let mut c = Compositor::with_default_layers(Tuning::default());
        let frames = c.tick(BackgroundVariant::Default, input());
        assert_eq!(frames[0].opacity, 1.0);
        assert!(!frames[1].visible());
        assert!(!frames[2].visible());
    }

    #[test]
    fn crossfade_keeps_outgoing_layer_visible() {
        let mut c = Compositor::with_default_layers(Tuning::default());
        let frames = c.tick(BackgroundVariant::Journey, input());
        assert!(frames[0].visible());
        assert!(frames[1].visible());
        assert!(!frames[2].visible());
    }
}
