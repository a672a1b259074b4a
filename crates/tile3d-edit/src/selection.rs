use tile3d_blocks::Face;
use tile3d_geom::{IVec3, Vec3};
use tile3d_grid::BlockGrid;
use tile3d_mesh_cpu::face_quad;

use crate::extrude::extrude;

/// One cell plus the face that was hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub tile: IVec3,
    pub face: Face,
}

impl Selection {
    /// Resolves a ray hit on the collision mesh to the cell behind it.
    ///
    /// `origin` is the world position of the grid. Returns `None` when the hit
    /// normal is not close to any axis.
    pub fn from_hit(hit_point: Vec3, hit_normal: Vec3, origin: Vec3) -> Option<Selection> {
        let face = Face::from_normal(hit_normal)?;
        let inside = hit_point - hit_normal * 0.5;
        Some(Selection {
            tile: (inside - origin).floor_i(),
            face,
        })
    }

    pub fn center(&self, origin: Vec3) -> Vec3 {
        origin + self.tile.center()
    }
}

/// Several cells sharing one face direction, in the order they were picked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultiSelection {
    pub tiles: Vec<IVec3>,
    pub face: Face,
}

impl From<Selection> for MultiSelection {
    fn from(s: Selection) -> Self {
        Self {
            tiles: vec![s.tile],
            face: s.face,
        }
    }
}

impl MultiSelection {
    /// Adds `tile` unless it is already selected. Returns whether it was new.
    pub fn add(&mut self, tile: IVec3) -> bool {
        if self.tiles.contains(&tile) {
            return false;
        }
        self.tiles.push(tile);
        true
    }

    /// Mean of the selected cell centers, offset by `origin`.
    pub fn center(&self, origin: Vec3) -> Vec3 {
        if self.tiles.is_empty() {
            return origin;
        }
        let sum = self
            .tiles
            .iter()
            .fold(Vec3::ZERO, |acc, t| acc + t.center());
        origin + sum / self.tiles.len() as f32
    }

    /// Point on the selected face plane where a drag handle sits.
    pub fn handle(&self, origin: Vec3) -> Vec3 {
        self.center(origin) + self.face.normal() * 0.5
    }

    /// Extrudes every selected cell and moves the selection with it.
    pub fn extrude(&mut self, grid: &mut BlockGrid, outwards: bool) {
        self.tiles = extrude(grid, &self.tiles, self.face.normal(), outwards);
    }

    /// Outline segments for every selected cell.
    pub fn outlines(&self, origin: Vec3) -> Vec<(Vec3, Vec3)> {
        self.tiles
            .iter()
            .flat_map(|t| outline_segments(origin + t.center(), self.face))
            .collect()
    }
}

/// Edges `a→b`, `b→c`, `c→d`, `d→a` of a face, in mesh winding order.
pub fn outline_segments(center: Vec3, face: Face) -> [(Vec3, Vec3); 4] {
    let [a, b, c, d] = face_quad(center, face);
    [(a, b), (b, c), (c, d), (d, a)]
}
