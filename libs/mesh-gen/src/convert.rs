//! # MSH to OBJ
//!
//! Converts a generated mesh file into the plain `v`/`f` text read by the
//! sampling stage.

use std::path::Path;

use config::constants::MSH_EXTENSION;
use mesh_io::format::require_extension;
use mesh_io::{read_msh, write_obj};
use mesh_log::Logger;

use crate::GenError;

/// Writes every node of `msh_path` as a vertex and every triangle cell as a
/// 1-based face of `obj_path`. Point, line and other cells are dropped.
pub fn msh_to_obj(
    msh_path: impl AsRef<Path>,
    obj_path: impl AsRef<Path>,
    logger: Option<&Logger>,
) -> Result<(), GenError> {
    let (msh_path, obj_path) = (msh_path.as_ref(), obj_path.as_ref());
    require_extension(msh_path, MSH_EXTENSION, logger)?;

    let mesh = read_msh(msh_path)?.to_mesh()?;
    write_obj(obj_path, &mesh)?;

    if let Some(logger) = logger {
        logger.info(format!("save {} to {}", msh_path.display(), obj_path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use mesh_io::{read_obj, write_msh, CellKind, IoError, Mesh, MshMesh};

    #[test]
    fn test_only_triangles_become_faces() {
        let mut msh = MshMesh::new();
        for p in [DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::new(1.0, 1.0, 0.0)] {
            msh.add_node(p);
        }
        msh.add_cell(CellKind::Point, 1, vec![0]);
        msh.add_cell(CellKind::Line, 1, vec![0, 1]);
        msh.add_cell(CellKind::Triangle, 1, vec![0, 1, 3]);
        msh.add_cell(CellKind::Triangle, 1, vec![0, 3, 2]);

        let dir = tempfile::tempdir().unwrap();
        let msh_path = dir.path().join("in.msh");
        let obj_path = dir.path().join("out.obj");
        write_msh(&msh_path, &msh).unwrap();

        msh_to_obj(&msh_path, &obj_path, None).unwrap();

        let text = std::fs::read_to_string(&obj_path).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 4);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 2);
        assert!(text.contains("f 1 2 4"));

        // Read back vertices come in first-use order
        let mesh = read_obj(&obj_path, None).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        let corners = |m: &Mesh, f: usize| m.faces()[f].map(|i| m.vertices()[i as usize]);
        let expected = msh.to_mesh().unwrap();
        for f in 0..2 {
            assert_eq!(corners(&mesh, f), corners(&expected, f));
        }
    }

    #[test]
    fn test_rejects_non_msh_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("mesh.txt");
        std::fs::write(&input, "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n").unwrap();
        let result = msh_to_obj(&input, dir.path().join("o.obj"), None);
        assert!(matches!(
            result,
            Err(GenError::Io(IoError::FormatMismatch { expected: "msh", .. }))
        ));
    }

    #[test]
    fn test_missing_msh() {
        let dir = tempfile::tempdir().unwrap();
        let result = msh_to_obj(dir.path().join("none.msh"), dir.path().join("o.obj"), None);
        assert!(matches!(result, Err(GenError::Io(_))));
    }
}
