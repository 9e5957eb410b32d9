//! # Surface View
//!
//! A registered mesh with named scalar quantities attached to it. Each
//! quantity is exported as its own colored copy of the mesh.
//!
//! ## Placement
//!
//! A quantity whose length equals the vertex count lives on vertices; one
//! whose length equals the face count lives on faces. Face values are
//! averaged onto the vertices around them for export.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use mesh_io::Mesh;
use ply_rs::ply::{
    Addable, DefaultElement, ElementDef, Encoding, Ply, Property, PropertyDef, PropertyType,
    ScalarType,
};
use ply_rs::writer::Writer;

use crate::{Colormap, PlotError};

/// Where the values of a quantity are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinedOn {
    Vertices,
    Faces,
}

/// A named scalar field on the view's mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarQuantity {
    pub name: String,
    pub values: Vec<f64>,
    pub defined_on: DefinedOn,
    pub cmap: Colormap,
}

/// A mesh registered for display, plus its quantities.
#[derive(Debug, Clone)]
pub struct SurfaceView {
    name: String,
    mesh: Mesh,
    quantities: Vec<ScalarQuantity>,
}

impl SurfaceView {
    pub fn register(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            name: name.into(),
            mesh,
            quantities: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn quantities(&self) -> &[ScalarQuantity] {
        &self.quantities
    }

    /// Attaches a scalar field. Re-adding a name replaces the earlier field.
    pub fn add_scalar_quantity(
        &mut self,
        name: impl Into<String>,
        values: Vec<f64>,
        cmap: Colormap,
    ) -> Result<&ScalarQuantity, PlotError> {
        let name = name.into();
        let vertices = self.mesh.vertex_count();
        let faces = self.mesh.face_count();
        let defined_on = if values.len() == vertices {
            DefinedOn::Vertices
        } else if values.len() == faces {
            DefinedOn::Faces
        } else {
            return Err(PlotError::LengthMismatch {
                name,
                len: values.len(),
                vertices,
                faces,
            });
        };

        self.quantities.retain(|q| q.name != name);
        self.quantities.push(ScalarQuantity {
            name,
            values,
            defined_on,
            cmap,
        });
        Ok(&self.quantities[self.quantities.len() - 1])
    }

    /// Per-vertex values of a quantity.
    pub fn vertex_values(&self, quantity: &ScalarQuantity) -> Vec<f64> {
        match quantity.defined_on {
            DefinedOn::Vertices => quantity.values.clone(),
            DefinedOn::Faces => {
                let mut sums = vec![0.0; self.mesh.vertex_count()];
                let mut counts = vec![0usize; self.mesh.vertex_count()];
                for (face, &value) in self.mesh.faces().iter().zip(&quantity.values) {
                    for &v in face {
                        sums[v as usize] += value;
                        counts[v as usize] += 1;
                    }
                }
                sums.iter()
                    .zip(&counts)
                    .map(|(&s, &c)| if c > 0 { s / c as f64 } else { 0.0 })
                    .collect()
            }
        }
    }

    /// Writes one colored PLY per quantity into `dir`, returning the paths
    /// in quantity order.
    pub fn export_ply(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, PlotError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| PlotError::file(dir, e))?;

        let mut written = Vec::with_capacity(self.quantities.len());
        for quantity in &self.quantities {
            let path = dir.join(format!("{}_{}.ply", self.name, sanitize(&quantity.name)));
            let colors = quantity.cmap.map_all(&self.vertex_values(quantity));
            write_ply(&path, &self.mesh, &colors).map_err(|e| PlotError::file(&path, e))?;
            written.push(path);
        }
        Ok(written)
    }
}

/// File-name safe form of a quantity name: `sqrt(u^2+v^2)` → `sqrt_u_2_v_2`.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '-' {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out.trim_matches('_').to_string()
}

/// Writes an ASCII PLY with per-vertex colors through `ply-rs`.
fn write_ply(path: &Path, mesh: &Mesh, colors: &[[u8; 3]]) -> std::io::Result<()> {
    let mut ply = Ply::<DefaultElement>::new();
    ply.header.encoding = Encoding::Ascii;

    let mut vertex_def = ElementDef::new("vertex".to_string());
    for axis in ["x", "y", "z"] {
        vertex_def.properties.add(PropertyDef::new(
            axis.to_string(),
            PropertyType::Scalar(ScalarType::Double),
        ));
    }
    for channel in ["red", "green", "blue"] {
        vertex_def.properties.add(PropertyDef::new(
            channel.to_string(),
            PropertyType::Scalar(ScalarType::UChar),
        ));
    }
    vertex_def.count = mesh.vertex_count();
    ply.header.elements.add(vertex_def);

    let mut face_def = ElementDef::new("face".to_string());
    face_def.properties.add(PropertyDef::new(
        "vertex_indices".to_string(),
        PropertyType::List(ScalarType::UChar, ScalarType::Int),
    ));
    face_def.count = mesh.face_count();
    ply.header.elements.add(face_def);

    let vertices = mesh
        .vertices()
        .iter()
        .zip(colors)
        .map(|(v, &[r, g, b])| {
            let mut element = DefaultElement::new();
            element.insert("x".to_string(), Property::Double(v.x));
            element.insert("y".to_string(), Property::Double(v.y));
            element.insert("z".to_string(), Property::Double(v.z));
            element.insert("red".to_string(), Property::UChar(r));
            element.insert("green".to_string(), Property::UChar(g));
            element.insert("blue".to_string(), Property::UChar(b));
            element
        })
        .collect();
    ply.payload.insert("vertex".to_string(), vertices);

    let faces = mesh
        .faces()
        .iter()
        .map(|face| {
            let mut element = DefaultElement::new();
            let indices = face.iter().map(|&i| i as i32).collect();
            element.insert("vertex_indices".to_string(), Property::ListInt(indices));
            element
        })
        .collect();
    ply.payload.insert("face".to_string(), faces);

    let mut out = BufWriter::new(File::create(path)?);
    Writer::new().write_ply(&mut out, &mut ply)?;
    out.flush()
}
