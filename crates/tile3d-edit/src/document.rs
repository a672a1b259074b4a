use tile3d_blocks::{AtlasConfig, Block, FaceState};
use tile3d_geom::{IVec3, Vec3};
use tile3d_grid::BlockGrid;
use tile3d_mesh_cpu::{MeshBuffers, RebuildStats, TileMesher};

use crate::{extrude, fill, paint};

/// Half-width of the starter floor laid down by [`Tile3D::with_default_floor`].
const DEFAULT_FLOOR_HALF: i32 = 4;

/// An editable tile scene: the block grid, its atlas settings and the two
/// meshes derived from them.
///
/// Grid edits (`create`, `destroy`, `at_mut`, `blocks_mut`) do not touch the
/// meshes; call [`Tile3D::rebuild`] to publish them. The paint, fill and
/// extrude helpers rebuild on their own when something changed.
#[derive(Clone, Debug, Default)]
pub struct Tile3D {
    grid: BlockGrid,
    atlas: AtlasConfig,
    mesher: TileMesher,
    last_stats: RebuildStats,
}

impl Tile3D {
    pub fn new(atlas: AtlasConfig) -> Self {
        Self {
            atlas,
            ..Self::default()
        }
    }

    /// Loads a persisted block sequence and builds its meshes.
    pub fn from_blocks(blocks: Vec<Block>, atlas: AtlasConfig) -> Self {
        let mut doc = Self {
            grid: BlockGrid::from_blocks(blocks),
            atlas,
            ..Self::default()
        };
        doc.rebuild();
        doc
    }

    /// A fresh document holding an 8x8 floor at `y = 0`, `x, z` in `[-4, 4)`.
    pub fn with_default_floor(atlas: AtlasConfig) -> Self {
        let mut doc = Self::new(atlas);
        for x in -DEFAULT_FLOOR_HALF..DEFAULT_FLOOR_HALF {
            for z in -DEFAULT_FLOOR_HALF..DEFAULT_FLOOR_HALF {
                doc.grid.create(IVec3::new(x, 0, z), None);
            }
        }
        doc.rebuild();
        doc
    }

    pub fn atlas(&self) -> &AtlasConfig {
        &self.atlas
    }

    /// Swaps the atlas settings and rebuilds so UVs follow.
    pub fn set_atlas(&mut self, atlas: AtlasConfig) {
        self.atlas = atlas;
        self.rebuild();
    }

    pub fn grid(&self) -> &BlockGrid {
        &self.grid
    }

    pub fn create(&mut self, pos: IVec3, copy_from: Option<IVec3>) -> &mut Block {
        self.grid.create(pos, copy_from)
    }

    pub fn destroy(&mut self, pos: IVec3) -> Option<Block> {
        self.grid.destroy(pos)
    }

    pub fn at(&self, pos: IVec3) -> Option<&Block> {
        self.grid.at(pos)
    }

    pub fn at_mut(&mut self, pos: IVec3) -> Option<&mut Block> {
        self.grid.at_mut(pos)
    }

    pub fn rebuild_index(&mut self) {
        self.grid.rebuild_index();
    }

    /// Regenerates both meshes from the current grid.
    pub fn rebuild(&mut self) -> RebuildStats {
        self.last_stats = self.mesher.rebuild(&self.grid, &self.atlas);
        self.last_stats
    }

    /// Stats of the most recent rebuild.
    pub fn stats(&self) -> RebuildStats {
        self.last_stats
    }

    pub fn render_mesh(&self) -> &MeshBuffers {
        self.mesher.render_mesh()
    }

    pub fn collision_mesh(&self) -> &MeshBuffers {
        self.mesher.collision_mesh()
    }

    pub fn blocks(&self) -> &[Block] {
        self.grid.blocks()
    }

    /// Raw sequence access; follow with [`Tile3D::rebuild_index`].
    pub fn blocks_mut(&mut self) -> &mut Vec<Block> {
        self.grid.blocks_mut()
    }

    /// Replaces the whole block sequence with a snapshot (undo/redo), then
    /// reindexes and rebuilds. Returns the sequence that was replaced.
    pub fn restore(&mut self, blocks: Vec<Block>) -> Vec<Block> {
        let previous = self.grid.replace_blocks(blocks);
        self.rebuild();
        previous
    }

    /// Paints one face of the block at `pos`.
    pub fn paint(&mut self, pos: IVec3, normal: Vec3, brush: &FaceState) -> bool {
        let changed = self
            .grid
            .at_mut(pos)
            .is_some_and(|b| paint::paint_face(b, normal, brush));
        if changed {
            self.rebuild();
        }
        changed
    }

    /// Bucket-fills the surface around the face of `pos` that `normal` names.
    pub fn fill(&mut self, pos: IVec3, normal: Vec3, brush: &FaceState) -> bool {
        let changed = fill::fill_faces(&mut self.grid, pos, normal, brush);
        if changed {
            self.rebuild();
        }
        changed
    }

    /// Extrudes `tiles` along `normal`. Always rebuilds.
    pub fn extrude(&mut self, tiles: &[IVec3], normal: Vec3, outwards: bool) -> Vec<IVec3> {
        let moved = extrude::extrude(&mut self.grid, tiles, normal, outwards);
        self.rebuild();
        moved
    }
}
