use tile3d_geom::{IVec3, Vec3};

/// One of the six axis-aligned cube sides. The discriminant is the slot
/// index into [`crate::Block::faces`] and must never be reordered.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Face {
    PosY = 0,
    NegY = 1,
    NegX = 2,
    PosX = 3,
    PosZ = 4,
    NegZ = 5,
}

impl Face {
    /// All faces in slot order: up, down, left, right, forward, back.
    pub const ALL: [Face; 6] = [
        Face::PosY,
        Face::NegY,
        Face::NegX,
        Face::PosX,
        Face::PosZ,
        Face::NegZ,
    ];

    /// Returns the `[0..6)` index of this face.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts a face index `[0..6)` back into a `Face` value.
    /// Falls back to `PosY` for out-of-range indices.
    #[inline]
    pub fn from_index(i: usize) -> Face {
        Face::ALL.get(i).copied().unwrap_or(Face::PosY)
    }

    /// Returns the integer grid delta when stepping out of this face.
    #[inline]
    pub fn delta(self) -> IVec3 {
        match self {
            Face::PosY => IVec3::UP,
            Face::NegY => IVec3::DOWN,
            Face::NegX => IVec3::LEFT,
            Face::PosX => IVec3::RIGHT,
            Face::PosZ => IVec3::FORWARD,
            Face::NegZ => IVec3::BACK,
        }
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        self.delta().as_vec3()
    }

    #[inline]
    pub fn opposite(self) -> Face {
        match self {
            Face::PosY => Face::NegY,
            Face::NegY => Face::PosY,
            Face::NegX => Face::PosX,
            Face::PosX => Face::NegX,
            Face::PosZ => Face::NegZ,
            Face::NegZ => Face::PosZ,
        }
    }

    /// Resolves an arbitrary (roughly axis-aligned) direction to the face it
    /// points out of. Directions more than ~37 degrees off every axis match
    /// nothing.
    pub fn from_normal(n: Vec3) -> Option<Face> {
        Face::ALL.into_iter().find(|f| n.dot(f.normal()) > 0.8)
    }
}
