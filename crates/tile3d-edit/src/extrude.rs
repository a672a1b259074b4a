use tile3d_blocks::Face;
use tile3d_geom::{IVec3, Vec3};
use tile3d_grid::BlockGrid;

/// Moves a selection of cells one step along `normal`.
///
/// Outwards, each cell grows a new block at `tile + normal` that copies its
/// faces. Inwards, each cell is destroyed. Returns the selection shifted by
/// one step in the chosen direction, in input order. A normal that matches
/// no face leaves the grid untouched and returns the input.
pub fn extrude(grid: &mut BlockGrid, tiles: &[IVec3], normal: Vec3, outwards: bool) -> Vec<IVec3> {
    let Some(face) = Face::from_normal(normal) else {
        return tiles.to_vec();
    };
    let step = if outwards { face.delta() } else { -face.delta() };

    let moved: Vec<IVec3> = tiles
        .iter()
        .map(|&tile| {
            if outwards {
                grid.create(tile + step, Some(tile));
            } else {
                grid.destroy(tile);
            }
            tile + step
        })
        .collect();

    log::trace!(
        target: "edit",
        "extrude {} tile(s) {:?} outwards={}",
        tiles.len(),
        face,
        outwards
    );
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile3d_blocks::FaceState;

    #[test]
    fn pull_out_copies_faces() {
        let mut grid = BlockGrid::new();
        grid.create(IVec3::ZERO, None)
            .fill_faces(FaceState::painted((4, 2)));
        let moved = extrude(&mut grid, &[IVec3::ZERO], Vec3::UP, true);
        assert_eq!(moved, vec![IVec3::UP]);
        assert_eq!(grid.len(), 2);
        assert_eq!(grid.at(IVec3::UP).unwrap().faces, grid.at(IVec3::ZERO).unwrap().faces);
    }

    #[test]
    fn push_in_destroys_and_steps_back() {
        let mut grid = BlockGrid::new();
        let tiles = [IVec3::new(0, 1, 0), IVec3::new(1, 1, 0)];
        for t in tiles {
            grid.create(t, None);
        }
        let moved = extrude(&mut grid, &tiles, Vec3::UP, false);
        assert_eq!(moved, vec![IVec3::ZERO, IVec3::new(1, 0, 0)]);
        assert!(grid.is_empty());
    }

    #[test]
    fn pull_out_onto_existing_block_is_idempotent() {
        let mut grid = BlockGrid::new();
        grid.create(IVec3::ZERO, None);
        grid.create(IVec3::RIGHT, None);
        let moved = extrude(&mut grid, &[IVec3::ZERO], Vec3::RIGHT, true);
        assert_eq!(moved, vec![IVec3::RIGHT]);
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn degenerate_normal_is_noop() {
        let mut grid = BlockGrid::new();
        grid.create(IVec3::ZERO, None);
        let moved = extrude(&mut grid, &[IVec3::ZERO], Vec3::ZERO, false);
        assert_eq!(moved, vec![IVec3::ZERO]);
        assert_eq!(grid.len(), 1);
    }
}
