use tile3d_blocks::{Face, FaceState};
use tile3d_geom::{IVec3, Vec3};
use tile3d_grid::BlockGrid;

use crate::mesh_build::MeshBuilder;
use crate::quad::face_quad;

/// Receiver for exposed block faces.
pub trait QuadSink {
    fn emit_quad(&mut self, at: IVec3, face: Face, corners: [Vec3; 4], state: &FaceState);
}

impl QuadSink for MeshBuilder {
    #[inline]
    fn emit_quad(&mut self, _at: IVec3, _face: Face, corners: [Vec3; 4], state: &FaceState) {
        let [a, b, c, d] = corners;
        self.quad(a, b, c, d, state);
    }
}

impl<T: QuadSink + ?Sized> QuadSink for &mut T {
    #[inline]
    fn emit_quad(&mut self, at: IVec3, face: Face, corners: [Vec3; 4], state: &FaceState) {
        (**self).emit_quad(at, face, corners, state);
    }
}

// Feeds the same quad to both sinks, in order.
impl<A: QuadSink, B: QuadSink> QuadSink for (A, B) {
    #[inline]
    fn emit_quad(&mut self, at: IVec3, face: Face, corners: [Vec3; 4], state: &FaceState) {
        self.0.emit_quad(at, face, corners, state);
        self.1.emit_quad(at, face, corners, state);
    }
}

/// True when the cell next to `pos` across `face` is empty.
#[inline]
pub fn is_face_exposed(grid: &BlockGrid, pos: IVec3, face: Face) -> bool {
    !grid.contains(pos + face.delta())
}

/// Walks blocks in sequence order and faces in slot order, sending every
/// exposed face to `sink`. Interior faces are never emitted, whatever their
/// paint state. Returns the number of exposed faces.
pub fn emit_exposed_faces(grid: &BlockGrid, sink: &mut impl QuadSink) -> usize {
    let mut exposed = 0;
    for block in grid {
        let center = block.position.center();
        for face in Face::ALL {
            if !is_face_exposed(grid, block.position, face) {
                continue;
            }
            sink.emit_quad(block.position, face, face_quad(center, face), block.face(face));
            exposed += 1;
        }
    }
    exposed
}
