use crate::constants::CUBELET_SIZE;
use crate::cube::CubeModel;
use crate::rotation::CubeRotation;
use glam::Vec3;

/// Slab test against an axis-aligned box. Returns the entry distance along
/// `ray_dir`, or the exit distance when the origin is inside the box.
#[inline]
pub fn ray_aabb(ray_origin: Vec3, ray_dir: Vec3, min: Vec3, max: Vec3) -> Option<f32> {
    let inv = ray_dir.recip();
    let t0 = (min - ray_origin) * inv;
    let t1 = (max - ray_origin) * inv;
    let t_near = t0.min(t1).max_element();
    let t_far = t0.max(t1).min_element();
    if t_far < 0.0 || t_near > t_far || t_near.is_nan() || t_far.is_nan() {
        return None;
    }
    Some(if t_near >= 0.0 { t_near } else { t_far })
}

/// Nearest cubelet hit by a world-space ray, given the cube's current rotation.
pub fn pick_cubelet(
    ray_origin: Vec3,
    ray_dir: Vec3,
    model: &CubeModel,
    rotation: CubeRotation,
) -> Option<usize> {
    let inv = rotation.to_quat().inverse();
    let ro = inv * ray_origin;
    let rd = inv * ray_dir;
    let half = Vec3::splat(CUBELET_SIZE * 0.5);
    let mut best = None::<(usize, f32)>;
    for (i, c) in model.cubelets.iter().enumerate() {
        let center = c.world_offset();
        if let Some(t) = ray_aabb(ro, rd, center - half, center + half) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
