// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;

#[test]
fn pointer_starts_centered() {
    let p = PointerState::default();
    assert_eq!(p.uv, [0.5, 0.5]);
}

#[test]
fn client_uv_is_y_up() {
    // Top-left corner of a 200x100 viewport
    assert_eq!(client_to_uv(0.0, 0.0, 0.0, 0.0, 200.0, 100.0), [0.0, 1.0]);
    // Bottom-right corner
    assert_eq!(client_to_uv(200.0, 100.0, 0.0, 0.0, 200.0, 100.0), [1.0, 0.0]);
    assert_eq!(client_to_uv(100.0, 50.0, 0.0, 0.0, 200.0, 100.0), [0.5, 0.5]);
}

#[test]
fn client_uv_respects_offset_and_clamps() {
    let uv = client_to_uv(60.0, 30.0, 10.0, 20.0, 100.0, 20.0);
    assert!((uv[0] - 0.5).abs() < 1e-6);
    assert!((uv[1] - 0.5).abs() < 1e-6);
    assert_eq!(client_to_uv(-50.0, 500.0, 0.0, 0.0, 100.0, 100.0), [0.0, 0.0]);
}

#[test]
fn degenerate_rect_maps_to_center() {
    assert_eq!(client_to_uv(10.0, 10.0, 0.0, 0.0, 0.0, 100.0), [0.5, 0.5]);
    assert_eq!(client_to_ndc(10.0, 10.0, 0.0, 0.0, 100.0, 0.0), None);
}

#[test]
fn ndc_center_and_corners() {
    assert_eq!(client_to_ndc(50.0, 50.0, 0.0, 0.0, 100.0, 100.0), Some([0.0, 0.0]));
    assert_eq!(client_to_ndc(0.0, 0.0, 0.0, 0.0, 100.0, 100.0), Some([-1.0, 1.0]));
    assert_eq!(client_to_ndc(100.0, 100.0, 0.0, 0.0, 100.0, 100.0), Some([1.0, -1.0]));
}

#[test]
fn ndc_outside_rect_is_none() {
    assert_eq!(client_to_ndc(150.0, 50.0, 0.0, 0.0, 100.0, 100.0), None);
    assert_eq!(client_to_ndc(50.0, -1.0, 0.0, 0.0, 100.0, 100.0), None);
}
