//! Rubik's-style cube model: 26 cubelets on the {-1, 0, 1}^3 grid.
//!
//! Sticker colors are drawn at random so the cube looks scrambled; the six
//! face-center cells can host projects, whose accent color then replaces the
//! cell's stickers.

use crate::constants::*;
use crate::content::Project;
use glam::{IVec3, Quat, Vec3};
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::{FRAC_PI_2, PI};

/// Sticker slots, in palette order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    Right,
    Left,
    Top,
    Bottom,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Top,
        Face::Bottom,
        Face::Front,
        Face::Back,
    ];

    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn normal(self) -> IVec3 {
        match self {
            Face::Right => IVec3::X,
            Face::Left => IVec3::NEG_X,
            Face::Top => IVec3::Y,
            Face::Bottom => IVec3::NEG_Y,
            Face::Front => IVec3::Z,
            Face::Back => IVec3::NEG_Z,
        }
    }

    /// Sticker center relative to its cubelet center.
    pub fn sticker_offset(self) -> Vec3 {
        self.normal().as_vec3() * STICKER_OFFSET
    }

    /// Turns a +Z facing quad so it faces along [`Face::normal`].
    pub fn sticker_rotation(self) -> Quat {
        match self {
            Face::Right => Quat::from_rotation_y(FRAC_PI_2),
            Face::Left => Quat::from_rotation_y(-FRAC_PI_2),
            Face::Top => Quat::from_rotation_x(-FRAC_PI_2),
            Face::Bottom => Quat::from_rotation_x(FRAC_PI_2),
            Face::Front => Quat::IDENTITY,
            Face::Back => Quat::from_rotation_y(PI),
        }
    }

    /// Whether a cell at `grid` shows this face on the outside of the cube.
    pub fn is_exposed_at(self, grid: IVec3) -> bool {
        let n = self.normal();
        grid.dot(n) == 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sticker {
    pub face: Face,
    pub color: [f32; 3],
}

#[derive(Clone, Debug)]
pub struct Cubelet {
    pub grid: IVec3,
    pub stickers: SmallVec<[Sticker; 3]>,
    /// Index into the project list handed to [`CubeModel::build`].
    pub project: Option<usize>,
}

impl Cubelet {
    pub fn is_face_center(&self) -> bool {
        is_face_center(self.grid)
    }

    pub fn world_offset(&self) -> Vec3 {
        self.grid.as_vec3() * (CUBELET_SIZE + CUBELET_SPACING)
    }

    pub fn sticker_on(&self, face: Face) -> Option<&Sticker> {
        self.stickers.iter().find(|s| s.face == face)
    }

    pub fn sticker_emissive(&self, hovered: bool) -> f32 {
        match (self.project, hovered) {
            (None, _) => 0.0,
            (Some(_), false) => EMISSIVE_PROJECT_IDLE,
            (Some(_), true) => EMISSIVE_PROJECT_HOVER,
        }
    }
}

/// Exactly one non-zero coordinate.
pub fn is_face_center(grid: IVec3) -> bool {
    grid.to_array().iter().filter(|c| **c != 0).count() == 1
}

#[derive(Clone, Debug)]
pub struct CubeModel {
    pub cubelets: Vec<Cubelet>,
}

impl CubeModel {
    /// Lay out the cube, skipping the hidden center cell. Projects are placed
    /// on face-center cells in x, then y, then z traversal order until either
    /// runs out.
    pub fn build<R: Rng + ?Sized>(projects: &[Project], rng: &mut R) -> Self {
        let mut cubelets = Vec::with_capacity(26);
        let mut next_project = 0usize;
        for x in -1..=1 {
            for y in -1..=1 {
                for z in -1..=1 {
                    let grid = IVec3::new(x, y, z);
                    let slot_colors: [[f32; 3]; 6] =
                        std::array::from_fn(|_| PALETTE[rng.gen_range(0..PALETTE.len())]);
                    if grid == IVec3::ZERO {
                        continue;
                    }
                    let project = if is_face_center(grid) && next_project < projects.len() {
                        next_project += 1;
                        Some(next_project - 1)
                    } else {
                        None
                    };
                    let stickers = Face::ALL
                        .iter()
                        .filter(|f| f.is_exposed_at(grid))
                        .map(|&face| Sticker {
                            face,
                            color: match project {
                                Some(i) => projects[i].color,
                                None => slot_colors[face.slot()],
                            },
                        })
                        .collect();
                    cubelets.push(Cubelet {
                        grid,
                        stickers,
                        project,
                    });
                }
            }
        }
        log::info!(
            "[cube] built {} cubelets, {} hosting projects",
            cubelets.len(),
            next_project
        );
        Self { cubelets }
    }

    pub fn face_centers(&self) -> impl Iterator<Item = (usize, &Cubelet)> {
        self.cubelets.iter().enumerate().filter(|(_, c)| c.is_face_center())
    }

    pub fn index_of(&self, grid: IVec3) -> Option<usize> {
        self.cubelets.iter().position(|c| c.grid == grid)
    }

    pub fn project_at(&self, index: usize) -> Option<usize> {
        self.cubelets.get(index).and_then(|c| c.project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn sticker_rotation_matches_face_normal() {
        for face in Face::ALL {
            let n = face.sticker_rotation() * Vec3::Z;
            assert!(
                (n - face.normal().as_vec3()).length() < 1e-5,
                "{face:?} rotated normal {n:?}"
            );
        }
    }

    #[test]
    fn corner_has_three_stickers() {
        let model = CubeModel::build(&[], &mut StdRng::seed_from_u64(1));
        let i = model.index_of(IVec3::new(1, 1, 1)).unwrap();
        let faces: Vec<Face> = model.cubelets[i].stickers.iter().map(|s| s.face).collect();
        assert_eq!(faces, vec![Face::Right, Face::Top, Face::Front]);
    }
}
