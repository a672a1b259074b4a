mod config;
mod obj;
mod scene;
mod watch;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tile3d_blocks::{AtlasConfig, FaceState};
use tile3d_edit::Tile3D;

use crate::scene::SceneFile;

#[derive(Parser, Debug)]
#[command(
    name = "tile3d",
    about = "Build render and collision meshes from tile scenes"
)]
struct Cli {
    /// Debug-level logging (RUST_LOG still applies per module)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a starter scene: an 8x8 floor at y = 0
    Init {
        scene: PathBuf,
        /// Atlas tile painted on every face, as `X,Y`
        #[arg(long, value_parser = parse_tile, default_value = "0,0")]
        paint: (i32, i32),
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Mesh a scene once and print stats
    Build {
        scene: PathBuf,
        /// Atlas config TOML (default: tile3d.toml near the working directory)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Export the render mesh as Wavefront OBJ
        #[arg(long)]
        obj: Option<PathBuf>,
    },
    /// Re-mesh whenever the scene or atlas config changes
    Watch {
        scene: PathBuf,
        #[arg(long)]
        config: Option<PathBuf>,
        #[arg(long)]
        obj: Option<PathBuf>,
    },
}

fn parse_tile(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad X '{x}': {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad Y '{y}': {e}"))?;
    Ok((x, y))
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

pub(crate) fn report(scene_path: &Path, doc: &Tile3D) {
    let stats = doc.stats();
    println!(
        "{}: {} blocks, {} exposed faces, render {} quads / {} tris, collision {} quads / {} tris",
        scene_path.display(),
        stats.blocks,
        stats.exposed_faces,
        stats.render_quads,
        doc.render_mesh().triangle_count(),
        stats.collision_quads,
        doc.collision_mesh().triangle_count(),
    );
    if let Some(b) = doc.collision_mesh().bounds {
        println!(
            "  bounds: ({}, {}, {}) .. ({}, {}, {})",
            b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z
        );
    }
}

fn init_scene(path: &Path, tile: (i32, i32), force: bool) -> Result<(), Box<dyn Error>> {
    if path.exists() && !force {
        return Err(format!("{} already exists (use --force to overwrite)", path.display()).into());
    }
    let mut doc = Tile3D::with_default_floor(AtlasConfig::default());
    for b in doc.blocks_mut() {
        b.fill_faces(FaceState::painted(tile));
    }
    let scene = SceneFile {
        blocks: doc.blocks().to_vec(),
    };
    scene.save(path)?;
    log::info!("wrote {} ({} blocks)", path.display(), scene.blocks.len());
    Ok(())
}

fn build_scene(
    scene_path: &Path,
    config: Option<PathBuf>,
    obj: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let atlas = config::load_atlas(&config::resolve_config_path(config));
    let scene = SceneFile::load(scene_path)?;
    let doc = Tile3D::from_blocks(scene.blocks, atlas);
    report(scene_path, &doc);
    if let Some(obj) = obj {
        obj::export_obj(doc.render_mesh(), obj)?;
    }
    Ok(())
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Init {
            scene,
            paint,
            force,
        } => init_scene(&scene, paint, force),
        Command::Build { scene, config, obj } => build_scene(&scene, config, obj.as_deref()),
        Command::Watch { scene, config, obj } => {
            let config_path = config::resolve_config_path(config);
            watch::run(&scene, &config_path, obj.as_deref())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(e) = run(cli.command) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
