use std::path::{Path, PathBuf};

use tile3d_blocks::AtlasConfig;

pub const CONFIG_FILE: &str = "tile3d.toml";
pub const CONFIG_ENV: &str = "TILE3D_CONFIG";

pub fn resolve_config_path(cli: Option<PathBuf>) -> PathBuf {
    // Precedence: CLI flag -> TILE3D_CONFIG env -> search nearby dirs -> CWD
    if let Some(p) = cli {
        return p;
    }
    if let Ok(p) = std::env::var(CONFIG_ENV) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return pb;
        }
    }
    if let Ok(cwd) = std::env::current_dir() {
        let mut cur = cwd.clone();
        for _ in 0..5 {
            let check = cur.join(CONFIG_FILE);
            if check.exists() {
                return check;
            }
            match cur.parent() {
                Some(parent) => cur = parent.to_path_buf(),
                None => break,
            }
        }
        return cwd.join(CONFIG_FILE);
    }
    PathBuf::from(CONFIG_FILE)
}

/// Reads the atlas settings, falling back to defaults on any error.
pub fn load_atlas(path: &Path) -> AtlasConfig {
    if !path.exists() {
        log::warn!("{} not found; using default atlas settings", path.display());
        return AtlasConfig::default();
    }
    match AtlasConfig::from_path(path) {
        Ok(cfg) => {
            log::info!(
                "atlas: {}x{} px tiles, padding {}, texture {:?}x{:?}",
                cfg.tile_width,
                cfg.tile_height,
                cfg.tile_padding,
                cfg.texture_width,
                cfg.texture_height
            );
            cfg
        }
        Err(e) => {
            log::warn!("{} parse error: {}; using default atlas settings", path.display(), e);
            AtlasConfig::default()
        }
    }
}
