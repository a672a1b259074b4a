//! Shared constants for tile3d-mesh-cpu.

/// Distance from a cell center to each of its faces.
pub(crate) const HALF_EXTENT: f32 = 0.5;

pub(crate) const VERTS_PER_QUAD: usize = 4;
pub(crate) const INDICES_PER_QUAD: usize = 6;

/// Two triangles per quad, fan from corner `a`.
pub(crate) const QUAD_INDICES: [u32; INDICES_PER_QUAD] = [0, 1, 2, 0, 2, 3];
