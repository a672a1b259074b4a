use serde::{Deserialize, Serialize};
use tile3d_geom::IVec3;

use crate::face::Face;

/// Paint state of a single block face.
///
/// Equality is structural over every field; change detection in the editor
/// compares whole values, never identities.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceState {
    /// Tile coordinate in the atlas grid (column, row from the bottom).
    pub tile: (i32, i32),
    /// Quarter turns, expected in `0..4`.
    pub rotation: u8,
    pub flip_x: bool,
    pub flip_y: bool,
    pub hidden: bool,
}

impl Default for FaceState {
    fn default() -> Self {
        Self {
            tile: (0, 0),
            rotation: 0,
            flip_x: false,
            flip_y: false,
            hidden: true,
        }
    }
}

impl FaceState {
    /// A visible face showing `tile` with no rotation or flip.
    #[inline]
    pub const fn painted(tile: (i32, i32)) -> Self {
        Self {
            tile,
            rotation: 0,
            flip_x: false,
            flip_y: false,
            hidden: false,
        }
    }

    /// Rotation reduced into `0..4`.
    #[inline]
    pub fn effective_rotation(&self) -> usize {
        (self.rotation % 4) as usize
    }

    /// Returns this face turned by `quarter_turns` more quarter turns.
    #[inline]
    pub fn rotated(self, quarter_turns: u8) -> Self {
        Self {
            rotation: ((self.effective_rotation() as u8) + quarter_turns % 4) % 4,
            ..self
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.hidden
    }
}

/// One occupied unit cell of the grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub position: IVec3,
    /// Indexed by [`Face::index`].
    #[serde(default)]
    pub faces: [FaceState; 6],
}

impl Block {
    /// A block with all faces hidden.
    pub fn new(position: IVec3) -> Self {
        Self {
            position,
            faces: [FaceState::default(); 6],
        }
    }

    #[inline]
    pub fn face(&self, face: Face) -> &FaceState {
        &self.faces[face.index()]
    }

    /// Mutable access to the face slot itself, so writes land in the block.
    #[inline]
    pub fn face_mut(&mut self, face: Face) -> &mut FaceState {
        &mut self.faces[face.index()]
    }

    /// Paints every face with the same state.
    pub fn fill_faces(&mut self, state: FaceState) {
        self.faces = [state; 6];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_face_is_hidden() {
        let f = FaceState::default();
        assert!(f.hidden);
        assert_eq!(f.tile, (0, 0));
        assert_eq!(f.rotation, 0);
        assert!(!f.is_visible());
    }

    #[test]
    fn equality_covers_every_field() {
        let base = FaceState::painted((2, 3));
        assert_eq!(base, FaceState::painted((2, 3)));
        assert_ne!(base, FaceState { tile: (2, 4), ..base });
        assert_ne!(base, FaceState { rotation: 1, ..base });
        assert_ne!(base, FaceState { flip_x: true, ..base });
        assert_ne!(base, FaceState { flip_y: true, ..base });
        assert_ne!(base, FaceState { hidden: true, ..base });
    }

    #[test]
    fn rotated_wraps_and_sanitises() {
        let f = FaceState::painted((0, 0));
        assert_eq!(f.rotated(1).rotation, 1);
        assert_eq!(f.rotated(3).rotated(1).rotation, 0);
        let bad = FaceState { rotation: 7, ..f };
        assert_eq!(bad.effective_rotation(), 3);
        assert_eq!(bad.rotated(1).rotation, 0);
    }

    #[test]
    fn face_mut_writes_through_to_slot() {
        let mut b = Block::new(IVec3::ZERO);
        b.face_mut(Face::PosX).hidden = false;
        b.face_mut(Face::PosX).tile = (5, 1);
        assert_eq!(b.faces[3], FaceState::painted((5, 1)));
        assert!(b.face(Face::NegX).hidden);
    }
}
