//! Headless editing operations over a block grid: painting, flood fill,
//! extrusion and selection geometry, plus the `Tile3D` document tying the
//! grid to its meshes.
#![forbid(unsafe_code)]

pub mod document;
pub mod extrude;
pub mod fill;
pub mod paint;
pub mod selection;

pub use document::Tile3D;
pub use extrude::extrude;
pub use fill::fill_faces;
pub use paint::{Brush, face_at, paint_face};
pub use selection::{MultiSelection, Selection, outline_segments};
