use tile3d_blocks::Face;
use tile3d_geom::Vec3;

use crate::constants::HALF_EXTENT;

/// Reference axis used to build the in-plane basis of a face: world-down for
/// side faces, world-left for top/bottom faces.
///
/// UV orientation of every face depends on this exact choice.
#[inline]
pub fn up_reference(normal: Vec3) -> Vec3 {
    if normal.y == 0.0 { Vec3::DOWN } else { Vec3::LEFT }
}

/// World-space corners `[a, b, c, d]` of the unit face `face` of the cell
/// centered at `center`.
///
/// With `perp1 = n × up` and `perp2 = perp1 × n`, the corners are
/// `a = -perp1 + perp2`, `b = perp1 + perp2`, `c = perp1 - perp2`,
/// `d = -perp1 - perp2` (halved, offset to the face plane). The winding
/// `a → b → c` faces outward along the normal. Selection outlines must use
/// this same order.
pub fn face_quad(center: Vec3, face: Face) -> [Vec3; 4] {
    let normal = face.normal();
    let up = up_reference(normal);
    let front = center + normal * HALF_EXTENT;
    let perp1 = normal.cross(up);
    let perp2 = perp1.cross(normal);

    [
        front + (-perp1 + perp2) * HALF_EXTENT,
        front + (perp1 + perp2) * HALF_EXTENT,
        front + (perp1 - perp2) * HALF_EXTENT,
        front + (-perp1 - perp2) * HALF_EXTENT,
    ]
}
