use tile3d_blocks::FaceState;
use tile3d_geom::{Aabb, Vec2, Vec3};

use crate::constants::{INDICES_PER_QUAD, QUAD_INDICES, VERTS_PER_QUAD};

/// Flat vertex/UV/normal/index arrays ready for a renderer or physics sink.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct MeshBuffers {
    /// Interleaved positions (x,y,z per vertex).
    pub pos: Vec<f32>,
    /// Interleaved texture coordinates (u,v per vertex).
    pub uv: Vec<f32>,
    /// Interleaved normals (x,y,z per vertex), filled in by `finalize`.
    pub norm: Vec<f32>,
    /// Triangle list referencing vertices.
    pub idx: Vec<u32>,
    /// Bounds over all vertices; `None` when the mesh is empty.
    pub bounds: Option<Aabb>,
}

impl MeshBuffers {
    /// Clears all arrays but retains capacity for reuse across rebuilds.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.pos.clear();
        self.uv.clear();
        self.norm.clear();
        self.idx.clear();
        self.bounds = None;
    }

    /// Pre-reserve capacity for approximately `n_quads` quads worth of data.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.pos.reserve(n_quads * VERTS_PER_QUAD * 3);
        self.uv.reserve(n_quads * VERTS_PER_QUAD * 2);
        self.norm.reserve(n_quads * VERTS_PER_QUAD * 3);
        self.idx.reserve(n_quads * INDICES_PER_QUAD);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos.len() / 3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.idx.len() / 3
    }

    #[inline]
    pub fn quad_count(&self) -> usize {
        self.idx.len() / INDICES_PER_QUAD
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pos.is_empty()
    }

    #[inline]
    pub fn vertex(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos[i * 3], self.pos[i * 3 + 1], self.pos[i * 3 + 2])
    }

    #[inline]
    pub fn uv_at(&self, i: usize) -> Vec2 {
        Vec2::new(self.uv[i * 2], self.uv[i * 2 + 1])
    }

    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::new(self.norm[i * 3], self.norm[i * 3 + 1], self.norm[i * 3 + 2])
    }

    /// Returns a slice of interleaved vertex positions (x,y,z per vertex).
    pub fn positions(&self) -> &[f32] {
        &self.pos
    }

    /// Returns a slice of interleaved vertex normals (x,y,z per vertex).
    pub fn normals(&self) -> &[f32] {
        &self.norm
    }

    pub fn indices(&self) -> &[u32] {
        &self.idx
    }

    fn push_quad(&mut self, corners: [Vec3; 4], uvs: [Vec2; 4]) {
        let base = self.vertex_count() as u32;
        for (p, t) in corners.iter().zip(uvs.iter()) {
            self.pos.extend_from_slice(&[p.x, p.y, p.z]);
            self.uv.extend_from_slice(&[t.x, t.y]);
        }
        self.idx.extend(QUAD_INDICES.iter().map(|i| base + i));
    }

    /// Recomputes per-vertex normals and the bounding box.
    ///
    /// Each triangle adds its unnormalised cross product to its three
    /// vertices; the sums are normalised, so shared vertices get an
    /// area-weighted average. Quads here are flat, so all four corners of a
    /// quad end up with the same normal.
    pub fn finalize(&mut self) {
        let n = self.vertex_count();
        let mut acc = vec![Vec3::ZERO; n];
        for tri in self.idx.chunks_exact(3) {
            let (ia, ib, ic) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let (a, b, c) = (self.vertex(ia), self.vertex(ib), self.vertex(ic));
            let face_n = (b - a).cross(c - a);
            acc[ia] += face_n;
            acc[ib] += face_n;
            acc[ic] += face_n;
        }
        self.norm.clear();
        self.norm.reserve(n * 3);
        for v in acc {
            let u = v.normalized();
            self.norm.extend_from_slice(&[u.x, u.y, u.z]);
        }
        let bounds = Aabb::from_points((0..n).map(|i| self.vertex(i)));
        self.bounds = bounds;
    }
}

/// Which of the two meshes a builder produces.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshKind {
    /// Textured geometry; hidden faces are skipped.
    Render,
    /// Solid geometry for picking/physics; hidden faces are kept, UVs are zero.
    Collision,
}

/// Texture coordinates for corners `[a, b, c, d]` of a visible face.
///
/// Candidates are taken in the order `[+x-y, -x-y, -x+y, +x+y]` around the
/// tile center (signs mirrored by the flip flags), then corner `k` takes
/// candidate `(rotation + k) % 4`.
pub fn face_uvs(face: &FaceState, uv_tile_size: Vec2, tile_padding: f32) -> [Vec2; 4] {
    let center = Vec2::new(face.tile.0 as f32 + 0.5, face.tile.1 as f32 + 0.5);
    let s = 0.5 - tile_padding;
    let fx = if face.flip_x { -1.0 } else { 1.0 };
    let fy = if face.flip_y { -1.0 } else { 1.0 };

    let candidates = [
        Vec2::new(center.x + s * fx, center.y - s * fy).scale(uv_tile_size),
        Vec2::new(center.x - s * fx, center.y - s * fy).scale(uv_tile_size),
        Vec2::new(center.x - s * fx, center.y + s * fy).scale(uv_tile_size),
        Vec2::new(center.x + s * fx, center.y + s * fy).scale(uv_tile_size),
    ];
    let r = face.effective_rotation();
    [
        candidates[r % 4],
        candidates[(r + 1) % 4],
        candidates[(r + 2) % 4],
        candidates[(r + 3) % 4],
    ]
}

/// Accumulates quads for one mesh between `begin` and `end`.
#[derive(Clone, Debug)]
pub struct MeshBuilder {
    kind: MeshKind,
    uv_tile_size: Vec2,
    tile_padding: f32,
    buffers: MeshBuffers,
}

impl MeshBuilder {
    pub fn new(kind: MeshKind) -> Self {
        Self {
            kind,
            uv_tile_size: Vec2::ONE,
            tile_padding: 0.0,
            buffers: MeshBuffers::default(),
        }
    }

    /// Starts a new pass: clears the buffers and captures atlas parameters.
    pub fn begin(&mut self, uv_tile_size: Vec2, tile_padding: f32) {
        self.uv_tile_size = uv_tile_size;
        self.tile_padding = tile_padding;
        self.buffers.clear_keep_capacity();
    }

    /// Grows the buffers for `n_quads` more quads. Call after `begin`.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.buffers.reserve_quads(n_quads);
    }

    /// Appends the quad `a, b, c, d` painted with `face`.
    ///
    /// Returns whether anything was emitted (render builders drop hidden
    /// faces).
    pub fn quad(&mut self, a: Vec3, b: Vec3, c: Vec3, d: Vec3, face: &FaceState) -> bool {
        let uvs = match self.kind {
            MeshKind::Render if face.hidden => return false,
            MeshKind::Render => face_uvs(face, self.uv_tile_size, self.tile_padding),
            MeshKind::Collision => [Vec2::ZERO; 4],
        };
        self.buffers.push_quad([a, b, c, d], uvs);
        true
    }

    /// Finishes the pass (normals, bounds) and returns the result.
    pub fn end(&mut self) -> &MeshBuffers {
        self.buffers.finalize();
        &self.buffers
    }

    #[inline]
    pub fn buffers(&self) -> &MeshBuffers {
        &self.buffers
    }
}
