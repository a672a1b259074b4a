//! CPU meshing crate: per-face quad emission into render and collision buffers.
#![forbid(unsafe_code)]

mod build;
mod constants;
mod emit;
mod mesh_build;
mod quad;

pub use build::{RebuildStats, TileMesher};
pub use emit::{QuadSink, emit_exposed_faces, is_face_exposed};
pub use mesh_build::{MeshBuffers, MeshBuilder, MeshKind, face_uvs};
pub use quad::{face_quad, up_reference};
