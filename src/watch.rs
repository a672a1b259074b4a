use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{EventKind, RecursiveMode, Watcher};
use tile3d_edit::Tile3D;

use crate::config::load_atlas;
use crate::scene::SceneFile;

/// Quiet period used to coalesce the burst of events a single save emits.
const DEBOUNCE: Duration = Duration::from_millis(150);

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

/// Loads the scene into `doc`, keeping the previous contents on failure.
pub fn reload_scene(doc: &mut Tile3D, scene_path: &Path, obj: Option<&Path>) -> bool {
    match SceneFile::load(scene_path) {
        Ok(scene) => {
            doc.restore(scene.blocks);
            crate::report(scene_path, doc);
            if let Some(obj) = obj {
                if let Err(e) = crate::obj::export_obj(doc.render_mesh(), obj) {
                    log::error!("OBJ export to {} failed: {}", obj.display(), e);
                }
            }
            true
        }
        Err(e) => {
            log::warn!("{} load error: {}; keeping previous scene", scene_path.display(), e);
            false
        }
    }
}

/// Rebuilds whenever the scene (or atlas config) changes on disk. Runs until
/// the watcher shuts down.
pub fn run(scene_path: &Path, config_path: &Path, obj: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let scene_abs = canonical(scene_path);
    let config_abs = canonical(config_path);

    let (tx, rx) = mpsc::channel::<PathBuf>();
    let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, notify::Error>| {
        match res {
            Ok(event) => match event.kind {
                EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_) | EventKind::Any => {
                    for p in event.paths {
                        let _ = tx.send(p);
                    }
                }
                _ => {}
            },
            Err(e) => log::warn!("watch error: {}", e),
        }
    })?;
    watcher.watch(&scene_abs, RecursiveMode::NonRecursive)?;
    if config_abs.exists() {
        if let Err(e) = watcher.watch(&config_abs, RecursiveMode::NonRecursive) {
            log::warn!("not watching {}: {}", config_abs.display(), e);
        }
    }

    let mut doc = Tile3D::new(load_atlas(config_path));
    reload_scene(&mut doc, scene_path, obj);
    log::info!("watching {} (ctrl-c to stop)", scene_abs.display());

    loop {
        let mut changed = vec![rx.recv()?];
        while let Ok(p) = rx.recv_timeout(DEBOUNCE) {
            changed.push(p);
        }
        let touched = |target: &Path| {
            changed
                .iter()
                .any(|p| p.as_path() == target || canonical(p).as_path() == target)
        };

        let config_changed = touched(config_abs.as_path());
        let scene_changed = touched(scene_abs.as_path());
        log::debug!(
            "change: {} path(s), scene={} config={}",
            changed.len(),
            scene_changed,
            config_changed
        );
        if config_changed {
            doc.set_atlas(load_atlas(config_path));
        }
        if scene_changed || config_changed {
            reload_scene(&mut doc, scene_path, obj);
        }
    }
}
