use tile3d_blocks::{AtlasConfig, Face};
use tile3d_grid::BlockGrid;

use crate::emit::emit_exposed_faces;
use crate::mesh_build::{MeshBuffers, MeshBuilder, MeshKind};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RebuildStats {
    pub blocks: usize,
    pub exposed_faces: usize,
    pub render_quads: usize,
    pub collision_quads: usize,
}

/// Owns the render and collision builders and regenerates both from a grid.
#[derive(Clone, Debug)]
pub struct TileMesher {
    render: MeshBuilder,
    collision: MeshBuilder,
}

impl Default for TileMesher {
    fn default() -> Self {
        Self::new()
    }
}

impl TileMesher {
    pub fn new() -> Self {
        Self {
            render: MeshBuilder::new(MeshKind::Render),
            collision: MeshBuilder::new(MeshKind::Collision),
        }
    }

    /// Clears both meshes and repopulates them from every block in `grid`.
    pub fn rebuild(&mut self, grid: &BlockGrid, atlas: &AtlasConfig) -> RebuildStats {
        let uv_tile_size = atlas.uv_tile_size();
        self.render.begin(uv_tile_size, atlas.tile_padding);
        self.collision.begin(uv_tile_size, atlas.tile_padding);
        // Upper bound: every face of every block exposed.
        let max_quads = grid.len() * Face::ALL.len();
        self.render.reserve_quads(max_quads);
        self.collision.reserve_quads(max_quads);

        let exposed_faces = {
            let mut both = (&mut self.render, &mut self.collision);
            emit_exposed_faces(grid, &mut both)
        };

        let render_quads = self.render.end().quad_count();
        let collision_quads = self.collision.end().quad_count();
        let stats = RebuildStats {
            blocks: grid.len(),
            exposed_faces,
            render_quads,
            collision_quads,
        };
        log::debug!(
            target: "mesh",
            "rebuild: blocks={} exposed={} render_quads={} collision_quads={}",
            stats.blocks,
            stats.exposed_faces,
            stats.render_quads,
            stats.collision_quads
        );
        stats
    }

    #[inline]
    pub fn render_mesh(&self) -> &MeshBuffers {
        self.render.buffers()
    }

    #[inline]
    pub fn collision_mesh(&self) -> &MeshBuffers {
        self.collision.buffers()
    }
}
