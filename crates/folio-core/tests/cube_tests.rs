// Host-side tests for cube construction, hover tracking and picking.

use folio_core::constants::PALETTE;
use folio_core::*;
use glam::{IVec3, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_cube(projects: &[Project]) -> CubeModel {
    CubeModel::build(projects, &mut StdRng::seed_from_u64(7))
}

#[test]
fn builds_26_cubelets_without_center() {
    let model = make_cube(PROJECTS);
    assert_eq!(model.cubelets.len(), 26);
    assert!(model.index_of(IVec3::ZERO).is_none());
    let total_stickers: usize = model.cubelets.iter().map(|c| c.stickers.len()).sum();
    assert_eq!(total_stickers, 54);
}

#[test]
fn six_face_centers() {
    let model = make_cube(PROJECTS);
    let centers: Vec<IVec3> = model.face_centers().map(|(_, c)| c.grid).collect();
    assert_eq!(centers.len(), 6);
    for g in centers {
        assert_eq!(g.abs().to_array().iter().sum::<i32>(), 1);
    }
}

#[test]
fn front_center_has_single_front_sticker() {
    let model = make_cube(&[]);
    let i = model.index_of(IVec3::new(0, 0, 1)).unwrap();
    let cell = &model.cubelets[i];
    assert_eq!(cell.stickers.len(), 1);
    assert!(cell.sticker_on(Face::Front).is_some());
    for face in [Face::Right, Face::Left, Face::Top, Face::Bottom, Face::Back] {
        assert!(cell.sticker_on(face).is_none(), "{face:?}");
    }
}

#[test]
fn sticker_colors_come_from_palette() {
    let model = make_cube(&[]);
    for c in &model.cubelets {
        for s in &c.stickers {
            assert!(PALETTE.contains(&s.color), "{:?}", s.color);
        }
    }
}

#[test]
fn projects_fill_face_centers_in_traversal_order() {
    let model = make_cube(PROJECTS);
    let hosts: Vec<(IVec3, usize)> = model
        .cubelets
        .iter()
        .filter_map(|c| c.project.map(|p| (c.grid, p)))
        .collect();
    assert_eq!(
        hosts,
        vec![
            (IVec3::new(-1, 0, 0), 0),
            (IVec3::new(0, -1, 0), 1),
            (IVec3::new(0, 0, -1), 2),
        ]
    );
    for (grid, p) in hosts {
        let cell = &model.cubelets[model.index_of(grid).unwrap()];
        assert!(cell.stickers.iter().all(|s| s.color == PROJECTS[p].color));
    }
}

#[test]
fn more_projects_than_centers_are_dropped() {
    let many: Vec<Project> = PROJECTS.iter().cycle().take(9).cloned().collect();
    let model = make_cube(&many);
    assert_eq!(model.cubelets.iter().filter(|c| c.project.is_some()).count(), 6);
}

#[test]
fn emissive_only_on_project_cells() {
    let model = make_cube(PROJECTS);
    let host = model.cubelets.iter().find(|c| c.project.is_some()).unwrap();
    let plain = model.cubelets.iter().find(|c| c.project.is_none()).unwrap();
    assert_eq!(host.sticker_emissive(false), 0.3);
    assert_eq!(host.sticker_emissive(true), 0.6);
    assert_eq!(plain.sticker_emissive(true), 0.0);
}

#[test]
fn instances_cover_every_body_and_sticker() {
    let model = make_cube(PROJECTS);
    let inst = cube_instances(&model, CubeRotation::ZERO, None);
    assert_eq!(inst.bodies.len(), 26);
    assert_eq!(inst.stickers.len(), 54);
    let hovered = model.face_centers().find(|(_, c)| c.project.is_some()).unwrap().0;
    let lit = cube_instances(&model, CubeRotation::ZERO, Some(hovered));
    let bright = lit.stickers.iter().filter(|s| s.color[3] == 0.6).count();
    assert_eq!(bright, 1);
}

#[test]
fn hover_enter_then_leave_clears() {
    let mut h = HoverTracker::default();
    assert_eq!(h.enter(3, Some(0)), Some(HoverChange { project: Some(0) }));
    assert_eq!(h.leave(3), Some(HoverChange { project: None }));
    assert_eq!(h.hovered_project(), None);
}

#[test]
fn hover_last_enter_wins() {
    let mut h = HoverTracker::default();
    h.enter(3, Some(0));
    h.enter(5, Some(1));
    assert_eq!(h.hovered_project(), Some(1));
    // A late leave from the first cell must not clear the second.
    assert_eq!(h.leave(3), None);
    assert_eq!(h.hovered_project(), Some(1));
}

#[test]
fn hover_update_pick_emits_transitions() {
    let model = make_cube(PROJECTS);
    let mut h = HoverTracker::default();
    let host = model.index_of(IVec3::new(-1, 0, 0)).unwrap();
    let plain = model.index_of(IVec3::new(1, 1, 1)).unwrap();
    let project_of = |i: usize| model.project_at(i);
    assert_eq!(
        h.update_pick(Some(host), project_of),
        Some(HoverChange { project: Some(0) })
    );
    assert_eq!(h.update_pick(Some(host), project_of), None);
    assert_eq!(
        h.update_pick(Some(plain), project_of),
        Some(HoverChange { project: None })
    );
    assert_eq!(h.update_pick(None, project_of), None);
    assert_eq!(h.hovered_cell(), None);
}

#[test]
fn pick_hits_front_center_at_rest() {
    let model = make_cube(PROJECTS);
    let camera = Camera::for_cube(1.0);
    let (ro, rd) = camera.ray_from_ndc(0.0, 0.0);
    let hit = pick_cubelet(ro, rd, &model, CubeRotation::ZERO).unwrap();
    assert_eq!(model.cubelets[hit].grid, IVec3::new(0, 0, 1));
}

#[test]
fn pick_follows_cube_rotation() {
    let model = make_cube(PROJECTS);
    let (ro, rd) = (Vec3::new(0.0, 0.0, 8.0), Vec3::NEG_Z);
    // Half a turn about Y brings the back face to the camera.
    let rot = CubeRotation {
        pitch: 0.0,
        yaw: std::f32::consts::PI,
    };
    let hit = pick_cubelet(ro, rd, &model, rot).unwrap();
    assert_eq!(model.cubelets[hit].grid, IVec3::new(0, 0, -1));
}

#[test]
fn pick_misses_outside_cube() {
    let model = make_cube(PROJECTS);
    let hit = pick_cubelet(Vec3::new(5.0, 0.0, 8.0), Vec3::NEG_Z, &model, CubeRotation::ZERO);
    assert_eq!(hit, None);
}
