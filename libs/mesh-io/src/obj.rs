//! # OBJ Meshes
//!
//! Reading goes through `tobj` with triangulation on; only positions and
//! position indices are kept. Polygons are fanned from their first corner.
//!
//! `tobj` stores each object's positions in first-use order, so vertices no
//! face references are dropped and vertex order follows the face list.
//! Objects and groups are concatenated into one mesh.

use std::io::Write;
use std::path::Path;

use config::constants::OBJ_EXTENSION;
use glam::DVec3;
use mesh_log::Logger;

use crate::format::require_extension;
use crate::text::write_text;
use crate::{log_loaded, IoError, Mesh};

/// Reads an `.obj` file.
///
/// Any other extension is logged and rejected with
/// [`IoError::FormatMismatch`] before the file is opened.
pub fn read_obj(path: impl AsRef<Path>, logger: Option<&Logger>) -> Result<Mesh, IoError> {
    let path = path.as_ref();
    require_extension(path, OBJ_EXTENSION, logger)?;
    let mesh = parse_obj_file(path)?;
    log_loaded(path, &mesh, logger);
    Ok(mesh)
}

pub(crate) fn parse_obj_file(path: &Path) -> Result<Mesh, IoError> {
    std::fs::metadata(path).map_err(|e| IoError::read(path, e))?;

    let options = tobj::LoadOptions {
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj(path, &options).map_err(|source| IoError::Obj {
        path: path.to_path_buf(),
        source,
    })?;

    let mut mesh = Mesh::new();
    for model in &models {
        let offset = mesh.vertex_count() as u32;
        for p in model.mesh.positions.chunks_exact(3) {
            mesh.add_vertex(DVec3::new(p[0], p[1], p[2]));
        }
        for tri in model.mesh.indices.chunks_exact(3) {
            mesh.add_face(offset + tri[0], offset + tri[1], offset + tri[2]);
        }
    }
    mesh.validate()?;
    Ok(mesh)
}

/// Writes `v x y z` lines followed by 1-based `f i j k` lines.
pub fn write_obj(path: impl AsRef<Path>, mesh: &Mesh) -> Result<(), IoError> {
    let path = path.as_ref();
    write_text(path, |w| {
        for v in mesh.vertices() {
            writeln!(w, "v {} {} {}", v.x, v.y, v.z)?;
        }
        for [a, b, c] in mesh.faces() {
            writeln!(w, "f {} {} {}", a + 1, b + 1, c + 1)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj_file(dir: &tempfile::TempDir, text: &str) -> std::path::PathBuf {
        let path = dir.path().join("mesh.obj");
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_read_plain_faces() {
        let dir = tempfile::tempdir().unwrap();
        let path = obj_file(&dir, "# square\nv 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3\nf 1 3 4\n");
        let mesh = parse_obj_file(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces(), &[[0, 1, 2], [0, 2, 3]]);
        assert_eq!(mesh.vertex(2), DVec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_read_slashed_and_negative_indices() {
        let dir = tempfile::tempdir().unwrap();
        let path = obj_file(
            &dir,
            "v 0 0 0\nv 1 0 0\nv 0 1 0\nvt 0 0\nvn 0 0 1\nf -3/1/1 -2/1/1 -1/1/1\n",
        );
        let mesh = parse_obj_file(&path).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.faces(), &[[0, 1, 2]]);
    }

    #[test]
    fn test_polygon_fan() {
        let dir = tempfile::tempdir().unwrap();
        let path = obj_file(&dir, "v 0 0 0\nv 1 0 0\nv 2 1 0\nv 1 2 0\nv 0 1 0\nf 1 2 3 4 5\n");
        let mesh = parse_obj_file(&path).unwrap();
        assert_eq!(mesh.face_count(), 3);
        assert_eq!(mesh.faces()[0], [0, 1, 2]);
        assert_eq!(mesh.faces()[2], [0, 3, 4]);
    }

    #[test]
    fn test_zero_index_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = obj_file(&dir, "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 0 1 2\n");
        assert!(matches!(parse_obj_file(&path), Err(IoError::Obj { .. })));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            parse_obj_file(&dir.path().join("none.obj")),
            Err(IoError::Read { .. })
        ));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.obj");
        let mesh = Mesh::from_parts(
            vec![DVec3::ZERO, DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 0.5, 0.0)],
            vec![[0, 1, 2]],
        )
        .unwrap();

        write_obj(&path, &mesh).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("f 1 2 3"));
        assert_eq!(read_obj(&path, None).unwrap(), mesh);
    }

    #[test]
    fn test_read_obj_checks_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mesh.off");
        std::fs::write(&path, "v 0 0 0\n").unwrap();
        assert!(matches!(
            read_obj(&path, None),
            Err(IoError::FormatMismatch { expected: "obj", .. })
        ));
    }
}
