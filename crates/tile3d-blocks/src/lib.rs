//! Block, face, and atlas configuration crate.
#![forbid(unsafe_code)]

pub mod config;
pub mod face;
pub mod types;

pub use config::AtlasConfig;
pub use face::Face;
pub use types::{Block, FaceState};
