use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tile3d_blocks::Block;

/// On-disk block sequence. Order is preserved and drives mesh output order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl SceneFile {
    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let scene: SceneFile = toml::from_str(toml_str)?;
        Ok(scene)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn to_toml_string(&self) -> Result<String, Box<dyn Error>> {
        Ok(toml::to_string(self)?)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile3d_blocks::{Face, FaceState};
    use tile3d_geom::IVec3;

    #[test]
    fn parses_minimal_scene() {
        let scene = SceneFile::from_toml_str(
            r#"
[[blocks]]
position = { x = 1, y = 0, z = -2 }

[[blocks]]
position = { x = 0, y = 0, z = 0 }
faces = [
  { tile = [3, 1], hidden = false },
  {}, {}, {}, {}, {},
]
"#,
        )
        .unwrap();
        assert_eq!(scene.blocks.len(), 2);
        assert_eq!(scene.blocks[0].position, IVec3::new(1, 0, -2));
        assert!(scene.blocks[0].faces.iter().all(|f| f.hidden));
        let top = scene.blocks[1].face(Face::PosY);
        assert_eq!(*top, FaceState::painted((3, 1)));
        assert!(scene.blocks[1].face(Face::NegY).hidden);
    }

    #[test]
    fn save_then_load_keeps_order() {
        let mut a = Block::new(IVec3::new(5, 0, 0));
        a.fill_faces(FaceState::painted((2, 2)).rotated(3));
        let scene = SceneFile {
            blocks: vec![a, Block::new(IVec3::new(-5, 1, 0))],
        };
        let path = std::env::temp_dir().join(format!("tile3d-scene-{}.toml", std::process::id()));
        scene.save(&path).unwrap();
        let back = SceneFile::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(back, scene);
    }

    #[test]
    fn garbage_is_an_error() {
        assert!(SceneFile::from_toml_str("blocks = 3").is_err());
    }
}
