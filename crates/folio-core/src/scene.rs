//! Retained cube scene: a pure function from (model, rotation, hover) to the
//! per-instance transforms and colors the renderer uploads each frame.

use crate::constants::{CUBELET_BODY_COLOR, CUBELET_SIZE, STICKER_SIZE};
use crate::cube::CubeModel;
use crate::rotation::CubeRotation;
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    /// rgb + emissive intensity
    pub color: [f32; 4],
}

/// Mesh vertex: position + normal, both in local unit space.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

fn quad(center: Vec3, normal: Vec3, u: Vec3, out: &mut Vec<Vertex>) {
    // v = n x u so that (u, v, n) is right-handed and the quad is CCW seen from outside
    let v = normal.cross(u);
    let corner = |su: f32, sv: f32| Vertex {
        position: (center + u * (0.5 * su) + v * (0.5 * sv)).to_array(),
        normal: normal.to_array(),
    };
    out.extend_from_slice(&[
        corner(-1.0, -1.0),
        corner(1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, -1.0),
        corner(1.0, 1.0),
        corner(-1.0, 1.0),
    ]);
}

/// Unit cube centered on the origin, 36 vertices.
pub fn unit_cube_vertices() -> Vec<Vertex> {
    let faces = [
        (Vec3::X, Vec3::Y),
        (Vec3::NEG_X, Vec3::Y),
        (Vec3::Y, Vec3::Z),
        (Vec3::NEG_Y, Vec3::Z),
        (Vec3::Z, Vec3::X),
        (Vec3::NEG_Z, Vec3::X),
    ];
    let mut out = Vec::with_capacity(36);
    for (n, u) in faces {
        quad(n * 0.5, n, u, &mut out);
    }
    out
}

/// Unit quad in the XY plane facing +Z, 6 vertices.
pub fn sticker_quad_vertices() -> Vec<Vertex> {
    let mut out = Vec::with_capacity(6);
    quad(Vec3::ZERO, Vec3::Z, Vec3::X, &mut out);
    out
}

#[derive(Clone, Debug, Default)]
pub struct CubeInstances {
    pub bodies: Vec<InstanceRaw>,
    pub stickers: Vec<InstanceRaw>,
}

impl CubeModel {
    pub fn instances(&self, rotation: CubeRotation, hovered_cell: Option<usize>) -> CubeInstances {
        cube_instances(self, rotation, hovered_cell)
    }
}

pub fn cube_instances(
    model: &CubeModel,
    rotation: CubeRotation,
    hovered_cell: Option<usize>,
) -> CubeInstances {
    let group = Mat4::from_quat(rotation.to_quat());
    let mut out = CubeInstances {
        bodies: Vec::with_capacity(model.cubelets.len()),
        stickers: Vec::with_capacity(54),
    };
    for (i, c) in model.cubelets.iter().enumerate() {
        let cell = group * Mat4::from_translation(c.world_offset());
        out.bodies.push(InstanceRaw {
            model: (cell * Mat4::from_scale(Vec3::splat(CUBELET_SIZE))).to_cols_array_2d(),
            color: [
                CUBELET_BODY_COLOR[0],
                CUBELET_BODY_COLOR[1],
                CUBELET_BODY_COLOR[2],
                0.0,
            ],
        });
        let emissive = c.sticker_emissive(hovered_cell == Some(i));
        for s in &c.stickers {
            let local = Mat4::from_scale_rotation_translation(
                Vec3::new(STICKER_SIZE, STICKER_SIZE, 1.0),
                s.face.sticker_rotation(),
                s.face.sticker_offset(),
            );
            out.stickers.push(InstanceRaw {
                model: (cell * local).to_cols_array_2d(),
                color: [s.color[0], s.color[1], s.color[2], emissive],
            });
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_outward_ccw(verts: &[Vertex]) {
        for tri in verts.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|v| Vec3::from_array(v.position));
            let n = Vec3::from_array(tri[0].normal);
            assert!((b - a).cross(c - a).dot(n) > 0.0, "triangle {tri:?}");
        }
    }

    #[test]
    fn unit_cube_is_closed_and_outward() {
        let verts = unit_cube_vertices();
        assert_eq!(verts.len(), 36);
        assert_outward_ccw(&verts);
        for v in &verts {
            let p = Vec3::from_array(v.position);
            assert!((p.abs().max_element() - 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn sticker_quad_faces_forward() {
        let verts = sticker_quad_vertices();
        assert_eq!(verts.len(), 6);
        assert_outward_ccw(&verts);
        assert!(verts.iter().all(|v| v.position[2] == 0.0 && v.normal == [0.0, 0.0, 1.0]));
    }
}
