//! # Geometry Model
//!
//! A small boundary-representation model in the style of the Gmsh OCC
//! kernel. Entities are created bottom-up and referenced by tag:
//!
//! ```text
//! add_point → PointTag
//! add_line(PointTag, PointTag) → LineTag
//! add_curve_loop(&[LineTag]) → LoopTag
//! add_plane_surface(&[LoopTag]) → SurfaceTag   (first loop outer, rest holes)
//! synchronize()
//! generate(dim) → MshMesh
//! ```
//!
//! Tags start at 1 for every entity kind. Entities added after the last
//! [`GeometryModel::synchronize`] are invisible to the mesher, so
//! [`GeometryModel::generate`] refuses to run until the model is synchronized
//! again.

mod tags;


pub use tags::{LineTag, LoopTag, PointTag, SurfaceTag};

use glam::DVec3;
use mesh_io::msh::{CellKind, MshMesh};

use crate::triangulate::{triangulate_rings, Ring};
use crate::GenError;

/// Options controlling the mesher.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeshOptions {
    /// Upper bound on the length of boundary segments. `None` keeps every
    /// line as a single segment.
    pub mesh_size: Option<f64>,
}

#[derive(Debug, Clone, Copy)]
struct Line {
    start: PointTag,
    end: PointTag,
}

/// A loop as an ordered list of lines, each used forward or reversed.
#[derive(Debug, Clone)]
struct CurveLoop {
    lines: Vec<(LineTag, bool)>,
}

#[derive(Debug, Clone)]
struct PlaneSurface {
    loops: Vec<LoopTag>,
}

/// Geometry entities of one model.
#[derive(Debug, Clone, Default)]
pub struct GeometryModel {
    name: String,
    points: Vec<DVec3>,
    lines: Vec<Line>,
    loops: Vec<CurveLoop>,
    surfaces: Vec<PlaneSurface>,
    synchronized: bool,
    options: MeshOptions,
}

impl GeometryModel {
    /// Creates an empty model.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> MeshOptions {
        self.options
    }

    /// Replaces the mesher options.
    pub fn set_options(&mut self, options: MeshOptions) -> Result<(), GenError> {
        if let Some(size) = options.mesh_size {
            if !(size.is_finite() && size > 0.0) {
                return Err(GenError::InvalidMeshSize(size));
            }
        }
        self.options = options;
        Ok(())
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn loop_count(&self) -> usize {
        self.loops.len()
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_synchronized(&self) -> bool {
        self.synchronized
    }

    // =========================================================================
    // Entity creation
    // =========================================================================

    /// Adds a point and returns its tag.
    pub fn add_point(&mut self, x: f64, y: f64, z: f64) -> PointTag {
        self.points.push(DVec3::new(x, y, z));
        self.synchronized = false;
        PointTag::from_index(self.points.len() - 1)
    }

    /// Adds a straight line between two existing points.
    pub fn add_line(&mut self, start: PointTag, end: PointTag) -> Result<LineTag, GenError> {
        self.point(start)?;
        self.point(end)?;
        if start == end {
            return Err(GenError::DegenerateLine {
                start: start.get(),
                end: end.get(),
            });
        }
        self.lines.push(Line { start, end });
        self.synchronized = false;
        Ok(LineTag::from_index(self.lines.len() - 1))
    }

    /// Adds a closed wire made of `lines`.
    ///
    /// Consecutive lines must share an endpoint and the last line must
    /// return to the start of the first. A line may be traversed against its
    /// own direction.
    pub fn add_curve_loop(&mut self, lines: &[LineTag]) -> Result<LoopTag, GenError> {
        let first = match lines.first() {
            Some(&tag) => self.line(tag)?,
            None => return Err(GenError::invalid_loop("no lines")),
        };

        let mut oriented = Vec::with_capacity(lines.len());
        // Orient the first line so that it leads into the second
        let first_forward = match lines.get(1) {
            Some(&next) => {
                let next = self.line(next)?;
                first.end == next.start || first.end == next.end
            }
            None => true,
        };
        oriented.push((lines[0], first_forward));
        let start = if first_forward { first.start } else { first.end };
        let mut cursor = if first_forward { first.end } else { first.start };

        for &tag in &lines[1..] {
            let line = self.line(tag)?;
            if line.start == cursor {
                oriented.push((tag, true));
                cursor = line.end;
            } else if line.end == cursor {
                oriented.push((tag, false));
                cursor = line.start;
            } else {
                return Err(GenError::invalid_loop(format!(
                    "line {} does not continue from point {}",
                    tag, cursor
                )));
            }
        }

        if cursor != start {
            return Err(GenError::invalid_loop(format!(
                "wire ends at point {} instead of {}",
                cursor, start
            )));
        }

        self.loops.push(CurveLoop { lines: oriented });
        self.synchronized = false;
        Ok(LoopTag::from_index(self.loops.len() - 1))
    }

    /// Adds a plane surface bounded by `loops`: the first is the outer
    /// boundary, the others are holes.
    pub fn add_plane_surface(&mut self, loops: &[LoopTag]) -> Result<SurfaceTag, GenError> {
        if loops.is_empty() {
            return Err(GenError::invalid_loop("plane surface needs at least one curve loop"));
        }
        for &tag in loops {
            self.curve_loop(tag)?;
        }
        self.surfaces.push(PlaneSurface {
            loops: loops.to_vec(),
        });
        self.synchronized = false;
        Ok(SurfaceTag::from_index(self.surfaces.len() - 1))
    }

    /// Makes every entity added so far visible to the mesher.
    pub fn synchronize(&mut self) {
        self.synchronized = true;
    }

    // =========================================================================
    // Meshing
    // =========================================================================

    /// Meshes every entity up to dimension `dim`.
    ///
    /// - `0`: one point cell per geometric point
    /// - `1`: plus one line cell per boundary segment
    /// - `2`: plus the triangles of every plane surface
    ///
    /// Node `i` is geometric point `i + 1`; nodes inserted by boundary
    /// refinement follow after all geometric points.
    pub fn generate(&self, dim: u32) -> Result<MshMesh, GenError> {
        if dim > 2 {
            return Err(GenError::InvalidDimension(dim));
        }
        if !self.synchronized {
            return Err(GenError::NotSynchronized);
        }

        let mut mesh = MshMesh::new();
        for &p in &self.points {
            mesh.add_node(p);
        }
        for i in 0..self.points.len() {
            mesh.add_cell(CellKind::Point, PointTag::from_index(i).get(), vec![i]);
        }
        if dim == 0 {
            return Ok(mesh);
        }

        // Node chain of every line from start to end, refinement included
        let mut chains = Vec::with_capacity(self.lines.len());
        for (i, line) in self.lines.iter().enumerate() {
            let chain = self.discretize(line, &mut mesh);
            for pair in chain.windows(2) {
                mesh.add_cell(
                    CellKind::Line,
                    LineTag::from_index(i).get(),
                    vec![pair[0], pair[1]],
                );
            }
            chains.push(chain);
        }
        if dim == 1 {
            return Ok(mesh);
        }

        for (i, surface) in self.surfaces.iter().enumerate() {
            let tag = SurfaceTag::from_index(i).get();
            let rings: Vec<Ring> = surface
                .loops
                .iter()
                .map(|&l| self.loop_ring(l, &chains))
                .collect();
            let triangles = triangulate_rings(mesh.nodes(), &rings)
                .map_err(|message| GenError::triangulation(tag, message))?;
            for tri in triangles {
                mesh.add_cell(CellKind::Triangle, tag, tri.to_vec());
            }
        }

        Ok(mesh)
    }

    /// Node indices along a line, inserting refinement nodes as needed.
    fn discretize(&self, line: &Line, mesh: &mut MshMesh) -> Vec<usize> {
        let a = line.start.index();
        let b = line.end.index();
        let (pa, pb) = (self.points[a], self.points[b]);

        let pieces = match self.options.mesh_size {
            Some(size) => (pa.distance(pb) / size).ceil().max(1.0) as usize,
            None => 1,
        };

        let mut chain = Vec::with_capacity(pieces + 1);
        chain.push(a);
        for k in 1..pieces {
            let t = k as f64 / pieces as f64;
            chain.push(mesh.add_node(pa.lerp(pb, t)));
        }
        chain.push(b);
        chain
    }

    /// Closed node ring of a loop; the first node is not repeated.
    fn loop_ring(&self, tag: LoopTag, chains: &[Vec<usize>]) -> Ring {
        let mut ring = Vec::new();
        for &(line, forward) in &self.loops[tag.index()].lines {
            let chain = &chains[line.index()];
            if forward {
                ring.extend_from_slice(&chain[..chain.len() - 1]);
            } else {
                ring.extend(chain.iter().rev().take(chain.len() - 1));
            }
        }
        ring
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    fn point(&self, tag: PointTag) -> Result<DVec3, GenError> {
        self.points
            .get(tag.index())
            .copied()
            .ok_or(GenError::UnknownEntity {
                kind: "point",
                tag: tag.get(),
            })
    }

    fn line(&self, tag: LineTag) -> Result<Line, GenError> {
        self.lines
            .get(tag.index())
            .copied()
            .ok_or(GenError::UnknownEntity {
                kind: "line",
                tag: tag.get(),
            })
    }

    fn curve_loop(&self, tag: LoopTag) -> Result<&CurveLoop, GenError> {
        self.loops.get(tag.index()).ok_or(GenError::UnknownEntity {
            kind: "curve loop",
            tag: tag.get(),
        })
    }
}
