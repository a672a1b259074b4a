use std::collections::VecDeque;

use hashbrown::HashSet;
use tile3d_blocks::{Face, FaceState};
use tile3d_geom::{IVec3, Vec3};
use tile3d_grid::BlockGrid;

use crate::paint::apply_brush;

/// Unit steps that stay in the plane of `face`.
fn in_plane_steps(face: Face) -> impl Iterator<Item = IVec3> {
    Face::ALL
        .into_iter()
        .filter(move |f| *f != face && *f != face.opposite())
        .map(Face::delta)
}

/// Bucket fill across a coplanar surface.
///
/// Starting at the block at `start`, the face that `normal` points out of is
/// painted with `brush`, then the fill spreads breadth-first to the four
/// in-plane neighbours. A neighbour joins when it exists, has not been
/// visited, its face in this direction is exposed and it shows the same tile
/// the start face had before painting.
///
/// Returns whether any face changed, the start face included.
pub fn fill_faces(grid: &mut BlockGrid, start: IVec3, normal: Vec3, brush: &FaceState) -> bool {
    let Some(face) = Face::from_normal(normal) else {
        return false;
    };
    let Some(block) = grid.at_mut(start) else {
        return false;
    };
    let target_tile = block.face(face).tile;
    let mut changed = apply_brush(block.face_mut(face), brush);

    let outwards = face.delta();
    let mut visited: HashSet<IVec3> = HashSet::new();
    visited.insert(start);
    let mut queue = VecDeque::from([start]);

    while let Some(from) = queue.pop_front() {
        for step in in_plane_steps(face) {
            let next = from + step;
            if visited.contains(&next) || grid.contains(next + outwards) {
                continue;
            }
            let Some(b) = grid.at_mut(next) else {
                continue;
            };
            if b.face(face).tile != target_tile {
                continue;
            }
            visited.insert(next);
            changed |= apply_brush(b.face_mut(face), brush);
            queue.push_back(next);
        }
    }

    log::trace!(
        target: "edit",
        "fill {:?} {:?}: visited={} changed={}",
        start,
        face,
        visited.len(),
        changed
    );
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor(tile: (i32, i32)) -> BlockGrid {
        let mut grid = BlockGrid::new();
        for x in 0..4 {
            for z in 0..4 {
                grid.create(IVec3::new(x, 0, z), None)
                    .fill_faces(FaceState::painted(tile));
            }
        }
        grid
    }

    fn top_tiles(grid: &BlockGrid, tile: (i32, i32)) -> usize {
        grid.iter()
            .filter(|b| b.face(Face::PosY).tile == tile)
            .count()
    }

    #[test]
    fn in_plane_steps_skip_the_normal_axis() {
        let steps: Vec<IVec3> = in_plane_steps(Face::PosY).collect();
        assert_eq!(steps.len(), 4);
        assert!(steps.iter().all(|s| s.y == 0));
    }

    #[test]
    fn fills_whole_matching_floor() {
        let mut grid = floor((0, 0));
        let brush = FaceState::painted((5, 5));
        assert!(fill_faces(&mut grid, IVec3::ZERO, Vec3::UP, &brush));
        assert_eq!(top_tiles(&grid, (5, 5)), 16);
        // sides are left alone
        assert!(grid.iter().all(|b| b.face(Face::PosX).tile == (0, 0)));
    }

    #[test]
    fn stops_at_different_tile() {
        let mut grid = floor((0, 0));
        // a wall of (1,1) at x == 2 splits the floor
        for z in 0..4 {
            grid.at_mut(IVec3::new(2, 0, z)).unwrap().face_mut(Face::PosY).tile = (1, 1);
        }
        fill_faces(&mut grid, IVec3::ZERO, Vec3::UP, &FaceState::painted((7, 0)));
        assert_eq!(top_tiles(&grid, (7, 0)), 8);
        assert_eq!(top_tiles(&grid, (0, 0)), 4);
    }

    #[test]
    fn covered_faces_block_the_fill() {
        let mut grid = floor((0, 0));
        // cover the x == 1 column so the start region is a single strip
        for z in 0..4 {
            grid.create(IVec3::new(1, 1, z), None);
        }
        fill_faces(&mut grid, IVec3::ZERO, Vec3::UP, &FaceState::painted((9, 9)));
        assert_eq!(top_tiles(&grid, (9, 9)), 4);
        assert!(
            grid.iter()
                .filter(|b| b.face(Face::PosY).tile == (9, 9))
                .all(|b| b.position.x == 0)
        );
    }

    #[test]
    fn unchanged_fill_reports_false() {
        let mut grid = floor((2, 2));
        let brush = FaceState::painted((2, 2));
        assert!(!fill_faces(&mut grid, IVec3::ZERO, Vec3::UP, &brush));
    }

    #[test]
    fn missing_start_or_bad_normal_is_noop() {
        let mut grid = floor((0, 0));
        let brush = FaceState::painted((1, 0));
        assert!(!fill_faces(&mut grid, IVec3::new(10, 0, 0), Vec3::UP, &brush));
        assert!(!fill_faces(&mut grid, IVec3::ZERO, Vec3::ZERO, &brush));
        assert_eq!(top_tiles(&grid, (0, 0)), 16);
    }
}
