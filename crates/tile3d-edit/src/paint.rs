use tile3d_blocks::{Block, Face, FaceState};
use tile3d_geom::Vec3;

/// The face state applied by paint and fill. A hidden brush acts as an
/// eraser.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Brush {
    pub state: FaceState,
}

impl Brush {
    /// Visible brush showing `tile`.
    pub fn tile(tile: (i32, i32)) -> Self {
        Self {
            state: FaceState::painted(tile),
        }
    }

    pub fn eraser() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_eraser(&self) -> bool {
        self.state.hidden
    }

    /// Next quarter turn, wrapping after four.
    pub fn rotate(&mut self) {
        self.state = self.state.rotated(1);
    }

    #[inline]
    pub fn state(&self) -> &FaceState {
        &self.state
    }
}

/// Applies `brush` to a single face slot.
///
/// A visible brush replaces the whole slot when it differs. A hidden brush
/// only flips `hidden`, keeping the tile, rotation and flips for a later
/// repaint.
pub(crate) fn apply_brush(slot: &mut FaceState, brush: &FaceState) -> bool {
    if !brush.hidden {
        if slot != brush {
            *slot = *brush;
            return true;
        }
    } else if !slot.hidden {
        slot.hidden = true;
        return true;
    }
    false
}

/// Paints the face of `block` that `normal` points out of. Returns whether
/// the block changed; normals that match no face leave it untouched.
pub fn paint_face(block: &mut Block, normal: Vec3, brush: &FaceState) -> bool {
    let Some(face) = Face::from_normal(normal) else {
        return false;
    };
    let changed = apply_brush(block.face_mut(face), brush);
    if changed {
        log::trace!(target: "edit", "paint {:?} {:?}", block.position, face);
    }
    changed
}

pub fn face_at(block: &Block, normal: Vec3) -> Option<FaceState> {
    Face::from_normal(normal).map(|f| *block.face(f))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile3d_geom::IVec3;

    #[test]
    fn visible_brush_overwrites_once() {
        let mut b = Block::new(IVec3::ZERO);
        let brush = FaceState::painted((3, 1));
        assert!(paint_face(&mut b, Vec3::UP, &brush));
        assert_eq!(*b.face(Face::PosY), brush);
        assert!(!paint_face(&mut b, Vec3::UP, &brush));
        // other faces untouched
        assert!(b.face(Face::NegY).hidden);
    }

    #[test]
    fn eraser_keeps_paint_data() {
        let mut b = Block::new(IVec3::ZERO);
        let mut painted = FaceState::painted((2, 5));
        painted.rotation = 3;
        painted.flip_x = true;
        *b.face_mut(Face::PosX) = painted;

        assert!(paint_face(&mut b, Vec3::RIGHT, &FaceState::default()));
        let f = *b.face(Face::PosX);
        assert!(f.hidden);
        assert_eq!(f.tile, (2, 5));
        assert_eq!(f.rotation, 3);
        assert!(f.flip_x);

        // already hidden: nothing to do
        assert!(!paint_face(&mut b, Vec3::RIGHT, &FaceState::default()));
    }

    #[test]
    fn off_axis_normal_is_ignored() {
        let mut b = Block::new(IVec3::ZERO);
        let diagonal = Vec3::new(1.0, 1.0, 0.0).normalized();
        assert!(!paint_face(&mut b, diagonal, &FaceState::painted((1, 1))));
        assert!(face_at(&b, diagonal).is_none());
        assert_eq!(face_at(&b, Vec3::new(0.1, 0.95, 0.0)), Some(*b.face(Face::PosY)));
    }

    #[test]
    fn brush_rotation_wraps() {
        let mut brush = Brush::tile((0, 0));
        for expected in [1, 2, 3, 0, 1] {
            brush.rotate();
            assert_eq!(brush.state().rotation, expected);
        }
        assert!(!brush.is_eraser());
        assert!(Brush::eraser().is_eraser());
    }
}
