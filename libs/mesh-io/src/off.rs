//! # OFF Meshes
//!
//! Object File Format as used by ModelNet:
//!
//! ```text
//! OFF
//! n_vertices n_faces n_edges
//! x y z            (n_vertices lines)
//! k i0 i1 ... ik-1 (n_faces lines)
//! ```
//!
//! Some ModelNet files glue the counts onto the header (`OFF490 518 0`);
//! that variant is accepted too. Polygons are fan-triangulated.

use std::path::Path;

use config::constants::OFF_EXTENSION;
use glam::DVec3;
use mesh_log::Logger;

use crate::format::require_extension;
use crate::text::{content_lines, parse_token, read_text};
use crate::{log_loaded, IoError, Mesh};

/// Reads an `.off` file.
///
/// Any other extension is logged and rejected with
/// [`IoError::FormatMismatch`] before the file is opened.
pub fn read_off(path: impl AsRef<Path>, logger: Option<&Logger>) -> Result<Mesh, IoError> {
    let path = path.as_ref();
    require_extension(path, OFF_EXTENSION, logger)?;
    let mesh = parse_off_file(path)?;
    log_loaded(path, &mesh, logger);
    Ok(mesh)
}

pub(crate) fn parse_off_file(path: &Path) -> Result<Mesh, IoError> {
    let text = read_text(path)?;
    parse_off(&text, path)
}

fn parse_off(text: &str, path: &Path) -> Result<Mesh, IoError> {
    let mut lines = content_lines(text);

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| IoError::parse(path, 1, "empty file"))?;
    let rest = header
        .strip_prefix("OFF")
        .ok_or_else(|| IoError::parse(path, header_no, "missing OFF header"))?
        .trim();

    let (counts_no, counts) = if rest.is_empty() {
        lines
            .next()
            .ok_or_else(|| IoError::parse(path, header_no + 1, "missing element counts"))?
    } else {
        (header_no, rest)
    };
    let counts: Vec<&str> = counts.split_whitespace().collect();
    if counts.len() < 2 {
        return Err(IoError::parse(path, counts_no, "expected vertex and face counts"));
    }
    let n_vertices: usize = parse_token(counts[0], path, counts_no, "a vertex count")?;
    let n_faces: usize = parse_token(counts[1], path, counts_no, "a face count")?;

    // Header counts are untrusted; each element needs at least one line
    let budget = text.lines().count();
    let mut mesh = Mesh::with_capacity(n_vertices.min(budget), n_faces.min(budget));
    for _ in 0..n_vertices {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| IoError::parse(path, counts_no, "unexpected end of vertex list"))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(IoError::parse(path, line_no, "vertex needs three coordinates"));
        }
        let x = parse_token(tokens[0], path, line_no, "a coordinate")?;
        let y = parse_token(tokens[1], path, line_no, "a coordinate")?;
        let z = parse_token(tokens[2], path, line_no, "a coordinate")?;
        mesh.add_vertex(DVec3::new(x, y, z));
    }

    for _ in 0..n_faces {
        let (line_no, line) = lines
            .next()
            .ok_or_else(|| IoError::parse(path, counts_no, "unexpected end of face list"))?;
        let mut tokens = line.split_whitespace();
        let corners: usize = match tokens.next() {
            Some(t) => parse_token(t, path, line_no, "a corner count")?,
            None => return Err(IoError::parse(path, line_no, "empty face")),
        };
        if corners < 3 {
            return Err(IoError::parse(
                path,
                line_no,
                format!("face has {} corners", corners),
            ));
        }

        let mut indices = Vec::with_capacity(corners);
        for _ in 0..corners {
            let token = tokens
                .next()
                .ok_or_else(|| IoError::parse(path, line_no, "face is missing indices"))?;
            let index: u32 = parse_token(token, path, line_no, "a vertex index")?;
            if index as usize >= n_vertices {
                return Err(IoError::parse(
                    path,
                    line_no,
                    format!("vertex index {} out of range", index),
                ));
            }
            indices.push(index);
        }
        // Trailing tokens may carry a face color
        for k in 1..corners - 1 {
            mesh.add_face(indices[0], indices[k], indices[k + 1]);
        }
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TETRA: &str = "OFF\n\
        4 4 6\n\
        0 0 0\n\
        1 0 0\n\
        0 1 0\n\
        0 0 1\n\
        3 0 2 1\n\
        3 0 1 3\n\
        3 1 2 3\n\
        3 0 3 2\n";

    #[test]
    fn test_parse_tetrahedron() {
        let mesh = parse_off(TETRA, Path::new("t.off")).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 4);
        assert_eq!(mesh.faces()[0], [0, 2, 1]);
        assert_eq!(mesh.vertex(3), DVec3::Z);
    }

    #[test]
    fn test_counts_glued_to_header() {
        let text = "OFF3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n";
        let mesh = parse_off(text, Path::new("glued.off")).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.face_count(), 1);
    }

    #[test]
    fn test_quad_is_fan_triangulated() {
        let text = "OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n";
        let mesh = parse_off(text, Path::new("quad.off")).unwrap();
        assert_eq!(mesh.faces(), &[[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_missing_header() {
        let err = parse_off("3 1 0\n", Path::new("bad.off")).unwrap_err();
        assert!(err.to_string().contains("missing OFF header"));
    }

    #[test]
    fn test_index_out_of_range() {
        let text = "OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 7\n";
        assert!(matches!(
            parse_off(text, Path::new("oob.off")),
            Err(IoError::Parse { line: 6, .. })
        ));
    }

    #[test]
    fn test_truncated_vertex_list() {
        let text = "OFF\n3 1 0\n0 0 0\n";
        assert!(parse_off(text, Path::new("short.off")).is_err());
    }

    #[test]
    fn test_huge_counts_fail_without_allocating() {
        let text = "OFF\n1000000000000000 1 0\n0 0 0\n";
        assert!(matches!(
            parse_off(text, Path::new("huge.off")),
            Err(IoError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_read_off_checks_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tetra.obj");
        std::fs::write(&path, TETRA).unwrap();
        assert!(matches!(
            read_off(&path, None),
            Err(IoError::FormatMismatch { expected: "off", .. })
        ));

        let path = dir.path().join("tetra.off");
        std::fs::write(&path, TETRA).unwrap();
        assert_eq!(read_off(&path, None).unwrap().face_count(), 4);
    }
}
