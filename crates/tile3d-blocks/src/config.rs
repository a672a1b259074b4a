use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tile3d_geom::Vec2;

/// Tile atlas layout used to derive per-face texture coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AtlasConfig {
    #[serde(default = "default_tile_px")]
    pub tile_width: u32,
    #[serde(default = "default_tile_px")]
    pub tile_height: u32,
    /// Inset in tile units applied to every edge to avoid bleeding.
    #[serde(default = "default_tile_padding")]
    pub tile_padding: f32,
    /// Atlas texture size in pixels, when a texture is bound.
    #[serde(default)]
    pub texture_width: Option<u32>,
    #[serde(default)]
    pub texture_height: Option<u32>,
}

fn default_tile_px() -> u32 {
    16
}

fn default_tile_padding() -> f32 {
    0.05
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            tile_width: default_tile_px(),
            tile_height: default_tile_px(),
            tile_padding: default_tile_padding(),
            texture_width: None,
            texture_height: None,
        }
    }
}

impl AtlasConfig {
    /// Fraction of the atlas covered by one tile. Without a (valid) texture
    /// a tile spans the whole UV square.
    pub fn uv_tile_size(&self) -> Vec2 {
        match (self.texture_width, self.texture_height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Vec2::new(
                self.tile_width as f32 / w as f32,
                self.tile_height as f32 / h as f32,
            ),
            _ => Vec2::ONE,
        }
    }

    /// Number of whole tile columns and rows the texture holds.
    pub fn grid_dims(&self) -> Option<(u32, u32)> {
        match (self.texture_width, self.texture_height) {
            (Some(w), Some(h)) if self.tile_width > 0 && self.tile_height > 0 => {
                Some((w / self.tile_width, h / self.tile_height))
            }
            _ => None,
        }
    }

    pub fn with_texture(mut self, width: u32, height: u32) -> Self {
        self.texture_width = Some(width);
        self.texture_height = Some(height);
        self
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: AtlasFile = toml::from_str(toml_str)?;
        Ok(cfg.atlas)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }
}

// --- Config file ---

#[derive(Deserialize, Default)]
struct AtlasFile {
    #[serde(default)]
    atlas: AtlasConfig,
}
