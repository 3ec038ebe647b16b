// Host-side tests for page-level constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let ids = [
        BACKGROUND_CANVAS_ID,
        CUBE_CANVAS_ID,
        WEBCAM_VIDEO_ID,
        CAMERA_PLACEHOLDER_ID,
        PROJECT_POPUP_ID,
        ERROR_PANEL_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        assert!(!a.starts_with('#'), "{a} should be a bare id");
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn pixel_ratio_caps_are_sane() {
    assert!(MAX_BACKGROUND_DPR >= 1.0);
    assert!(MAX_CUBE_DPR >= MAX_BACKGROUND_DPR);
}

#[test]
fn clear_colors_are_normalized() {
    for c in CLEAR_COLOR.iter().chain(CUBE_CLEAR_COLOR.iter()) {
        assert!((0.0..=1.0).contains(c));
    }
}

#[test]
fn loading_text_mentions_camera() {
    assert!(CAMERA_LOADING_TEXT.starts_with("Loading Camera"));
    assert!(TUNING_ATTR_PREFIX.ends_with('-'));
}
