use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tile3d_mesh_cpu::MeshBuffers;

/// Writes `mesh` as a Wavefront OBJ with positions, UVs and normals.
pub fn write_obj(mesh: &MeshBuffers, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "# tile3d mesh")?;
    writeln!(
        out,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    for i in 0..mesh.vertex_count() {
        let p = mesh.vertex(i);
        writeln!(out, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for i in 0..mesh.vertex_count() {
        let t = mesh.uv_at(i);
        writeln!(out, "vt {} {}", t.x, t.y)?;
    }
    if mesh.normals().len() == mesh.positions().len() {
        for i in 0..mesh.vertex_count() {
            let n = mesh.normal(i);
            writeln!(out, "vn {} {} {}", n.x, n.y, n.z)?;
        }
    }
    // OBJ indices are 1-based
    for tri in mesh.indices().chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(out, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}

pub fn export_obj(mesh: &MeshBuffers, path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer)?;
    writer.flush()?;
    log::info!("wrote {} ({} triangles)", path.display(), mesh.triangle_count());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tile3d_blocks::{AtlasConfig, FaceState};
    use tile3d_geom::IVec3;
    use tile3d_grid::BlockGrid;
    use tile3d_mesh_cpu::TileMesher;

    #[test]
    fn single_face_obj() {
        let mut grid = BlockGrid::new();
        let b = grid.create(IVec3::ZERO, None);
        b.faces[0] = FaceState::painted((0, 0));
        let mut mesher = TileMesher::new();
        mesher.rebuild(&grid, &AtlasConfig::default());

        let mut out = Vec::new();
        write_obj(mesher.render_mesh(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 4);
        let faces: Vec<&str> = text.lines().filter(|l| l.starts_with("f ")).collect();
        assert_eq!(faces, vec!["f 1/1/1 2/2/2 3/3/3", "f 1/1/1 3/3/3 4/4/4"]);
    }
}
