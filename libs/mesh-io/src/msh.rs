//! # Gmsh MSH
//!
//! ASCII reader for MSH 2.x and 4.1, writer for the legacy 2.2 layout:
//!
//! ```text
//! $MeshFormat
//! 2.2 0 8
//! $EndMeshFormat
//! $Nodes
//! n
//! tag x y z
//! $EndNodes
//! $Elements
//! m
//! tag type n_tags physical entity node...
//! $EndElements
//! ```
//!
//! Version 4.1 groups nodes and elements into entity blocks; a node block
//! lists all its tags before its coordinates, and an element block carries
//! the type and entity shared by its elements. `$Entities` is skipped.
//!
//! Node tags are mapped to 0-based positions on read and renumbered from 1
//! on write. Sections other than the three above are skipped.

use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use config::constants::{MSH_DATA_SIZE, MSH_VERSION};
use glam::DVec3;

use crate::text::{parse_token, read_text, write_text};
use crate::{IoError, Mesh};

// =============================================================================
// Cells
// =============================================================================

/// Element type codes of the MSH 2 format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// 1-node point (type 15)
    Point,
    /// 2-node line (type 1)
    Line,
    /// 3-node triangle (type 2)
    Triangle,
    /// 4-node quadrangle (type 3)
    Quad,
    /// Any other element type, kept by code
    Other(u32),
}

impl CellKind {
    pub fn from_code(code: u32) -> Self {
        match code {
            15 => CellKind::Point,
            1 => CellKind::Line,
            2 => CellKind::Triangle,
            3 => CellKind::Quad,
            other => CellKind::Other(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            CellKind::Point => 15,
            CellKind::Line => 1,
            CellKind::Triangle => 2,
            CellKind::Quad => 3,
            CellKind::Other(code) => *code,
        }
    }

    /// Node count for the known kinds.
    pub fn node_count(&self) -> Option<usize> {
        match self {
            CellKind::Point => Some(1),
            CellKind::Line => Some(2),
            CellKind::Triangle => Some(3),
            CellKind::Quad => Some(4),
            CellKind::Other(_) => None,
        }
    }
}

/// One element: its kind, the geometric entity it belongs to and its nodes
/// as 0-based positions in [`MshMesh::nodes`].
#[derive(Debug, Clone, PartialEq)]
pub struct MshCell {
    pub kind: CellKind,
    pub entity: u32,
    pub nodes: Vec<usize>,
}

// =============================================================================
// Mesh
// =============================================================================

/// Nodes plus typed cells, as produced by the mesh generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MshMesh {
    nodes: Vec<DVec3>,
    cells: Vec<MshCell>,
}

impl MshMesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node and returns its position.
    pub fn add_node(&mut self, position: DVec3) -> usize {
        self.nodes.push(position);
        self.nodes.len() - 1
    }

    pub fn add_cell(&mut self, kind: CellKind, entity: u32, nodes: Vec<usize>) {
        self.cells.push(MshCell {
            kind,
            entity,
            nodes,
        });
    }

    #[inline]
    pub fn nodes(&self) -> &[DVec3] {
        &self.nodes
    }

    #[inline]
    pub fn cells(&self) -> &[MshCell] {
        &self.cells
    }

    /// Cells of one kind, in file order.
    pub fn cells_of(&self, kind: CellKind) -> impl Iterator<Item = &MshCell> {
        self.cells.iter().filter(move |c| c.kind == kind)
    }

    pub fn count_of(&self, kind: CellKind) -> usize {
        self.cells_of(kind).count()
    }

    /// Keeps every node and only the triangle cells.
    pub fn to_mesh(&self) -> Result<Mesh, IoError> {
        let faces = self
            .cells_of(CellKind::Triangle)
            .map(|c| match c.nodes.as_slice() {
                &[a, b, c] => Ok([a as u32, b as u32, c as u32]),
                nodes => Err(IoError::unsupported(format!(
                    "triangle cell with {} nodes",
                    nodes.len()
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Mesh::from_parts(self.nodes.clone(), faces)
    }
}

// =============================================================================
// Reading
// =============================================================================

struct Lines<'a> {
    path: &'a Path,
    inner: std::iter::Enumerate<std::str::Lines<'a>>,
    last: usize,
}

impl<'a> Lines<'a> {
    fn new(path: &'a Path, text: &'a str) -> Self {
        Self {
            path,
            inner: text.lines().enumerate(),
            last: 0,
        }
    }

    /// Next non-blank line, trimmed.
    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        for (i, line) in self.inner.by_ref() {
            self.last = i + 1;
            let line = line.trim();
            if !line.is_empty() {
                return Some((i + 1, line));
            }
        }
        None
    }

    fn expect_line(&mut self, what: &str) -> Result<(usize, &'a str), IoError> {
        let last = self.last;
        self.next_line().ok_or_else(|| {
            IoError::parse(
                self.path,
                last,
                format!("unexpected end of file, expected {}", what),
            )
        })
    }

    fn expect_exact(&mut self, marker: &str) -> Result<(), IoError> {
        let (line_no, line) = self.expect_line(marker)?;
        if line == marker {
            Ok(())
        } else {
            Err(IoError::parse(
                self.path,
                line_no,
                format!("expected {}, found '{}'", marker, line),
            ))
        }
    }

    fn skip_section(&mut self, name: &str) -> Result<(), IoError> {
        let end = format!("$End{}", name);
        while let Some((_, line)) = self.next_line() {
            if line == end {
                return Ok(());
            }
        }
        Err(IoError::parse(self.path, self.last, format!("missing {}", end)))
    }
}

/// Node and element layout announced by `$MeshFormat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// One node or element per line, `2.x`
    Legacy,
    /// Entity blocks, `4.1`
    Blocks,
}

/// Reads an MSH 2.x or 4.1 ASCII file.
///
/// Binary files and other versions are rejected with
/// [`IoError::Unsupported`]. Both layouts produce the same [`MshMesh`]:
/// nodes in file order, cells tagged with their elementary entity.
pub fn read_msh(path: impl AsRef<Path>) -> Result<MshMesh, IoError> {
    let path = path.as_ref();
    let text = read_text(path)?;
    parse_msh(&text, path)
}

fn parse_msh(text: &str, path: &Path) -> Result<MshMesh, IoError> {
    let mut lines = Lines::new(path, text);
    let mut mesh = MshMesh::new();
    let mut tags: HashMap<u64, usize> = HashMap::new();
    let mut layout = None;

    while let Some((line_no, line)) = lines.next_line() {
        let Some(section) = line.strip_prefix('$') else {
            return Err(IoError::parse(
                path,
                line_no,
                format!("expected a section header, found '{}'", line),
            ));
        };
        match (section, layout) {
            ("MeshFormat", _) => {
                let (header_no, header) = lines.expect_line("format header")?;
                layout = Some(check_format(header, path, header_no)?);
                lines.expect_exact("$EndMeshFormat")?;
            }
            ("Nodes", Some(Layout::Legacy)) => read_nodes_legacy(&mut lines, &mut mesh, &mut tags)?,
            ("Nodes", Some(Layout::Blocks)) => read_nodes_blocks(&mut lines, &mut mesh, &mut tags)?,
            ("Elements", Some(Layout::Legacy)) => read_elements_legacy(&mut lines, &mut mesh, &tags)?,
            ("Elements", Some(Layout::Blocks)) => read_elements_blocks(&mut lines, &mut mesh, &tags)?,
            ("Nodes" | "Elements", None) => {
                return Err(IoError::parse(path, line_no, "section before $MeshFormat"));
            }
            // $Entities, $PhysicalNames and friends carry nothing we keep
            (other, _) => lines.skip_section(other)?,
        }
    }

    if layout.is_none() {
        return Err(IoError::parse(path, lines.last.max(1), "missing $MeshFormat section"));
    }
    Ok(mesh)
}

fn check_format(header: &str, path: &Path, line: usize) -> Result<Layout, IoError> {
    let fields: Vec<&str> = header.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(IoError::parse(path, line, "format header needs version, file type and data size"));
    }
    let layout = match fields[0] {
        v if v.starts_with("2.") => Layout::Legacy,
        "4.1" => Layout::Blocks,
        v => {
            return Err(IoError::unsupported(format!(
                "MSH version {} in {} (2.x and 4.1 are read)",
                v,
                path.display()
            )))
        }
    };
    let file_type: u32 = parse_token(fields[1], path, line, "a file type")?;
    if file_type != 0 {
        return Err(IoError::unsupported(format!("binary MSH file {}", path.display())));
    }
    Ok(layout)
}

/// Splits `line`, requiring at least `min` fields.
fn fields_of<'a>(
    line: &'a str,
    min: usize,
    path: &Path,
    line_no: usize,
    what: &str,
) -> Result<Vec<&'a str>, IoError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < min {
        return Err(IoError::parse(path, line_no, format!("{} needs {} fields", what, min)));
    }
    Ok(fields)
}

fn parse_position(fields: &[&str], path: &Path, line_no: usize) -> Result<DVec3, IoError> {
    let x = parse_token(fields[0], path, line_no, "a coordinate")?;
    let y = parse_token(fields[1], path, line_no, "a coordinate")?;
    let z = parse_token(fields[2], path, line_no, "a coordinate")?;
    Ok(DVec3::new(x, y, z))
}

fn insert_node(
    mesh: &mut MshMesh,
    tags: &mut HashMap<u64, usize>,
    tag: u64,
    position: DVec3,
    path: &Path,
    line_no: usize,
) -> Result<(), IoError> {
    let index = mesh.add_node(position);
    if tags.insert(tag, index).is_some() {
        return Err(IoError::parse(path, line_no, format!("duplicate node tag {}", tag)));
    }
    Ok(())
}

/// Maps node tags to positions and checks the count against `kind`.
fn cell_nodes(
    kind: CellKind,
    node_tags: &[&str],
    tags: &HashMap<u64, usize>,
    path: &Path,
    line_no: usize,
) -> Result<Vec<usize>, IoError> {
    let nodes = node_tags
        .iter()
        .map(|t| {
            let tag: u64 = parse_token(t, path, line_no, "a node tag")?;
            tags.get(&tag)
                .copied()
                .ok_or_else(|| IoError::parse(path, line_no, format!("unknown node tag {}", tag)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(expected) = kind.node_count() {
        if nodes.len() != expected {
            return Err(IoError::parse(
                path,
                line_no,
                format!("{:?} element has {} nodes, expected {}", kind, nodes.len(), expected),
            ));
        }
    }
    Ok(nodes)
}

// MSH 2.x

fn read_nodes_legacy(
    lines: &mut Lines<'_>,
    mesh: &mut MshMesh,
    tags: &mut HashMap<u64, usize>,
) -> Result<(), IoError> {
    let path = lines.path;
    let (count_no, count) = lines.expect_line("node count")?;
    let count: usize = parse_token(count, path, count_no, "a node count")?;
    for _ in 0..count {
        let (node_no, node) = lines.expect_line("node")?;
        let fields = fields_of(node, 4, path, node_no, "node")?;
        let tag: u64 = parse_token(fields[0], path, node_no, "a node tag")?;
        let position = parse_position(&fields[1..], path, node_no)?;
        insert_node(mesh, tags, tag, position, path, node_no)?;
    }
    lines.expect_exact("$EndNodes")
}

fn read_elements_legacy(
    lines: &mut Lines<'_>,
    mesh: &mut MshMesh,
    tags: &HashMap<u64, usize>,
) -> Result<(), IoError> {
    let path = lines.path;
    let (count_no, count) = lines.expect_line("element count")?;
    let count: usize = parse_token(count, path, count_no, "an element count")?;
    for _ in 0..count {
        let (elem_no, elem) = lines.expect_line("element")?;
        let (kind, entity, nodes) = parse_element(elem, tags, path, elem_no)?;
        mesh.add_cell(kind, entity, nodes);
    }
    lines.expect_exact("$EndElements")
}

fn parse_element(
    line: &str,
    tags: &HashMap<u64, usize>,
    path: &Path,
    line_no: usize,
) -> Result<(CellKind, u32, Vec<usize>), IoError> {
    let fields = fields_of(line, 3, path, line_no, "element")?;
    let kind = CellKind::from_code(parse_token(fields[1], path, line_no, "an element type")?);
    let n_tags: usize = parse_token(fields[2], path, line_no, "a tag count")?;
    let first_node = 3 + n_tags;
    if fields.len() < first_node {
        return Err(IoError::parse(path, line_no, "element is missing tags"));
    }

    // The second tag is the elementary entity; the first is the physical group
    let entity = if n_tags >= 2 {
        parse_token(fields[4], path, line_no, "an entity tag")?
    } else {
        0
    };

    let nodes = cell_nodes(kind, &fields[first_node..], tags, path, line_no)?;
    Ok((kind, entity, nodes))
}

// MSH 4.1

fn read_nodes_blocks(
    lines: &mut Lines<'_>,
    mesh: &mut MshMesh,
    tags: &mut HashMap<u64, usize>,
) -> Result<(), IoError> {
    let path = lines.path;
    let (head_no, head) = lines.expect_line("node summary")?;
    let head = fields_of(head, 2, path, head_no, "node summary")?;
    let n_blocks: usize = parse_token(head[0], path, head_no, "a block count")?;
    let n_nodes: usize = parse_token(head[1], path, head_no, "a node count")?;
    let first = mesh.nodes().len();

    for _ in 0..n_blocks {
        let (block_no, block) = lines.expect_line("node block")?;
        let block = fields_of(block, 4, path, block_no, "node block")?;
        let in_block: usize = parse_token(block[3], path, block_no, "a node count")?;

        // All tags of the block come first, then all coordinates
        let mut block_tags = Vec::new();
        for _ in 0..in_block {
            let (tag_no, tag) = lines.expect_line("node tag")?;
            block_tags.push(parse_token::<u64>(tag, path, tag_no, "a node tag")?);
        }
        for tag in block_tags {
            let (node_no, node) = lines.expect_line("node coordinates")?;
            let fields = fields_of(node, 3, path, node_no, "node")?;
            let position = parse_position(&fields, path, node_no)?;
            insert_node(mesh, tags, tag, position, path, node_no)?;
        }
    }

    let read = mesh.nodes().len() - first;
    if read != n_nodes {
        return Err(IoError::parse(
            path,
            head_no,
            format!("{} nodes announced, {} found", n_nodes, read),
        ));
    }
    lines.expect_exact("$EndNodes")
}

fn read_elements_blocks(
    lines: &mut Lines<'_>,
    mesh: &mut MshMesh,
    tags: &HashMap<u64, usize>,
) -> Result<(), IoError> {
    let path = lines.path;
    let (head_no, head) = lines.expect_line("element summary")?;
    let head = fields_of(head, 2, path, head_no, "element summary")?;
    let n_blocks: usize = parse_token(head[0], path, head_no, "a block count")?;
    let n_elements: usize = parse_token(head[1], path, head_no, "an element count")?;
    let first = mesh.cells().len();

    for _ in 0..n_blocks {
        let (block_no, block) = lines.expect_line("element block")?;
        let block = fields_of(block, 4, path, block_no, "element block")?;
        let entity: u32 = parse_token(block[1], path, block_no, "an entity tag")?;
        let kind = CellKind::from_code(parse_token(block[2], path, block_no, "an element type")?);
        let in_block: usize = parse_token(block[3], path, block_no, "an element count")?;

        for _ in 0..in_block {
            let (elem_no, elem) = lines.expect_line("element")?;
            let fields = fields_of(elem, 2, path, elem_no, "element")?;
            let nodes = cell_nodes(kind, &fields[1..], tags, path, elem_no)?;
            mesh.add_cell(kind, entity, nodes);
        }
    }

    let read = mesh.cells().len() - first;
    if read != n_elements {
        return Err(IoError::parse(
            path,
            head_no,
            format!("{} elements announced, {} found", n_elements, read),
        ));
    }
    lines.expect_exact("$EndElements")
}

// =============================================================================
// Writing
// =============================================================================

/// Writes an MSH 2.2 ASCII file. Nodes and elements are numbered from 1.
pub fn write_msh(path: impl AsRef<Path>, mesh: &MshMesh) -> Result<(), IoError> {
    let path = path.as_ref();
    write_text(path, |w| {
        writeln!(w, "$MeshFormat")?;
        writeln!(w, "{} 0 {}", MSH_VERSION, MSH_DATA_SIZE)?;
        writeln!(w, "$EndMeshFormat")?;

        writeln!(w, "$Nodes")?;
        writeln!(w, "{}", mesh.nodes.len())?;
        for (i, p) in mesh.nodes.iter().enumerate() {
            writeln!(w, "{} {} {} {}", i + 1, p.x, p.y, p.z)?;
        }
        writeln!(w, "$EndNodes")?;

        writeln!(w, "$Elements")?;
        writeln!(w, "{}", mesh.cells.len())?;
        for (i, cell) in mesh.cells.iter().enumerate() {
            write!(w, "{} {} 2 0 {}", i + 1, cell.kind.code(), cell.entity)?;
            for node in &cell.nodes {
                write!(w, " {}", node + 1)?;
            }
            writeln!(w)?;
        }
        writeln!(w, "$EndElements")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n\
        $PhysicalNames\n1\n2 1 \"domain\"\n$EndPhysicalNames\n\
        $Nodes\n4\n10 0 0 0\n20 1 0 0\n30 1 1 0\n40 0 1 0\n$EndNodes\n\
        $Elements\n4\n1 15 2 0 1 10\n2 1 2 0 1 10 20\n3 2 2 0 1 10 20 30\n4 2 2 0 1 10 30 40\n$EndElements\n";

    #[test]
    fn test_parse_maps_node_tags() {
        let mesh = parse_msh(SQUARE, Path::new("sq.msh")).unwrap();
        assert_eq!(mesh.nodes().len(), 4);
        assert_eq!(mesh.cells().len(), 4);
        assert_eq!(mesh.count_of(CellKind::Triangle), 2);
        assert_eq!(mesh.count_of(CellKind::Point), 1);
        let tri = mesh.cells_of(CellKind::Triangle).next().unwrap();
        assert_eq!(tri.nodes, vec![0, 1, 2]);
        assert_eq!(tri.entity, 1);
    }

    #[test]
    fn test_to_mesh_keeps_only_triangles() {
        let mesh = parse_msh(SQUARE, Path::new("sq.msh")).unwrap().to_mesh().unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.faces(), &[[0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn test_rejects_binary() {
        let text = "$MeshFormat\n2.2 1 8\n$EndMeshFormat\n";
        assert!(matches!(
            parse_msh(text, Path::new("b.msh")),
            Err(IoError::Unsupported { .. })
        ));
    }

    // One surface triangle plus its three corner points, as Gmsh 4.1 lays it out
    const TRIANGLE_V4: &str = "$MeshFormat\n4.1 0 8\n$EndMeshFormat\n\
        $Entities\n3 0 1 0\n1 0 0 0 0\n2 1 0 0 0\n3 0 1 0 0\n\
        1 0 0 0 1 1 0 0 0\n$EndEntities\n\
        $Nodes\n2 3 1 3\n0 1 0 1\n1\n0 0 0\n2 1 0 2\n2\n3\n1 0 0\n0 1 0\n$EndNodes\n\
        $Elements\n2 2 1 2\n0 1 15 1\n1 1\n2 1 2 1\n2 1 2 3\n$EndElements\n";

    #[test]
    fn test_parse_version_four_blocks() {
        let mesh = parse_msh(TRIANGLE_V4, Path::new("tri.msh")).unwrap();
        assert_eq!(mesh.nodes(), &[DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert_eq!(mesh.count_of(CellKind::Point), 1);
        let tri = mesh.cells_of(CellKind::Triangle).next().unwrap();
        assert_eq!(tri.nodes, vec![0, 1, 2]);
        assert_eq!(tri.entity, 1);
        assert_eq!(mesh.to_mesh().unwrap().faces(), &[[0, 1, 2]]);
    }

    #[test]
    fn test_version_four_counts_must_match() {
        let text = TRIANGLE_V4.replace("$Nodes\n2 3 1 3", "$Nodes\n2 4 1 4");
        assert!(matches!(
            parse_msh(&text, Path::new("tri.msh")),
            Err(IoError::Parse { .. })
        ));
    }

    #[test]
    fn test_rejects_other_versions() {
        for version in ["4.0", "3.0", "1.0"] {
            let text = format!("$MeshFormat\n{} 0 8\n$EndMeshFormat\n", version);
            assert!(matches!(
                parse_msh(&text, Path::new("v.msh")),
                Err(IoError::Unsupported { .. })
            ));
        }
    }

    #[test]
    fn test_unknown_node_tag() {
        let text = "$MeshFormat\n2.2 0 8\n$EndMeshFormat\n$Nodes\n1\n1 0 0 0\n$EndNodes\n\
            $Elements\n1\n1 1 2 0 1 1 2\n$EndElements\n";
        assert!(matches!(
            parse_msh(text, Path::new("t.msh")),
            Err(IoError::Parse { line: 10, .. })
        ));
    }

    #[test]
    fn test_missing_format_section() {
        assert!(parse_msh("", Path::new("e.msh")).is_err());
    }

    #[test]
    fn test_write_then_read_preserves_cells() {
        let mut mesh = MshMesh::new();
        let a = mesh.add_node(DVec3::ZERO);
        let b = mesh.add_node(DVec3::new(2.0, 0.0, 0.0));
        let c = mesh.add_node(DVec3::new(0.0, 1.5, 0.0));
        mesh.add_cell(CellKind::Line, 3, vec![a, b]);
        mesh.add_cell(CellKind::Line, 3, vec![b, c]);
        mesh.add_cell(CellKind::Triangle, 1, vec![a, b, c]);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.msh");
        write_msh(&path, &mesh).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("$MeshFormat\n2.2 0 8\n"));

        let back = read_msh(&path).unwrap();
        assert_eq!(back, mesh);
    }
}
