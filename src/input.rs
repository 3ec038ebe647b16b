use web_sys as web;

/// Last known pointer position over the page, normalized with the origin at
/// the bottom-left so it can be fed straight into shader uniforms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub uv: [f32; 2],
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            uv: [0.5, 0.5],
        }
    }
}

/// Client (CSS pixel, top-left origin) coordinates to y-up uv within a rect.
/// A degenerate rect maps everything to the center.
#[inline]
pub fn client_to_uv(x: f32, y: f32, left: f32, top: f32, width: f32, height: f32) -> [f32; 2] {
    if width <= 0.0 || height <= 0.0 {
        return [0.5, 0.5];
    }
    let u = (x - left) / width;
    let v = 1.0 - (y - top) / height;
    [u.clamp(0.0, 1.0), v.clamp(0.0, 1.0)]
}

/// Client coordinates to normalized device coordinates of a rect, or `None`
/// when the point falls outside it.
#[inline]
pub fn client_to_ndc(
    x: f32,
    y: f32,
    left: f32,
    top: f32,
    width: f32,
    height: f32,
) -> Option<[f32; 2]> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let u = (x - left) / width;
    let v = (y - top) / height;
    if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
        return None;
    }
    Some([u * 2.0 - 1.0, 1.0 - v * 2.0])
}

#[inline]
pub fn viewport_uv(ev: &web::PointerEvent, window: &web::Window) -> [f32; 2] {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0) as f32;
    client_to_uv(ev.client_x() as f32, ev.client_y() as f32, 0.0, 0.0, w, h)
}

#[inline]
pub fn element_ndc(ev: &web::PointerEvent, el: &web::Element) -> Option<[f32; 2]> {
    let rect = el.get_bounding_client_rect();
    client_to_ndc(
        ev.client_x() as f32,
        ev.client_y() as f32,
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}
