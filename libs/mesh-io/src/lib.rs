//! # Mesh IO
//!
//! Data types and plain-text file formats shared by the pipeline stages.
//!
//! ## Formats
//!
//! | Module | Extension | Read | Write |
//! |---|---|---|---|
//! | [`xyz`] | `.xyz` | point cloud (`x y z r g b`) | points (`x y z`) |
//! | [`off`] | `.off` | triangle mesh | no |
//! | [`obj`] | `.obj` | triangle mesh (`tobj`) | vertex/face text |
//! | [`msh`] | `.msh` | Gmsh 2.x and 4.1 ASCII | Gmsh 2.2 ASCII |
//!
//! Readers that are tied to an extension refuse files with another one and
//! report the mismatch through the optional logger before returning
//! [`IoError::FormatMismatch`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mesh_io::{read_mesh, MeshFormat};
//!
//! let mesh = read_mesh("car_0001.off", MeshFormat::Off, None)?;
//! println!("{} vertices, {} faces", mesh.vertex_count(), mesh.face_count());
//! # Ok::<(), mesh_io::IoError>(())
//! ```

pub mod error;
pub mod files;
pub mod format;
pub mod mesh;
pub mod msh;
pub mod obj;
pub mod off;
pub mod point_cloud;
mod text;
pub mod xyz;

use std::path::Path;

use mesh_log::Logger;

pub use error::IoError;
pub use files::get_all_files;
pub use format::MeshFormat;
pub use mesh::Mesh;
pub use msh::{read_msh, write_msh, CellKind, MshCell, MshMesh};
pub use obj::{read_obj, write_obj};
pub use off::read_off;
pub use point_cloud::PointCloud;
pub use xyz::{read_point_cloud, save_xyz};

/// Reads a mesh in an explicitly chosen format.
///
/// Unlike [`read_off`] and [`read_obj`] the file extension is not checked.
pub fn read_mesh(
    path: impl AsRef<Path>,
    format: MeshFormat,
    logger: Option<&Logger>,
) -> Result<Mesh, IoError> {
    let path = path.as_ref();
    let mesh = match format {
        MeshFormat::Off => off::parse_off_file(path)?,
        MeshFormat::Obj => obj::parse_obj_file(path)?,
    };
    log_loaded(path, &mesh, logger);
    Ok(mesh)
}

pub(crate) fn log_loaded(path: &Path, mesh: &Mesh, logger: Option<&Logger>) {
    if let Some(logger) = logger {
        logger.info(format!("read {} successfully!", path.display()));
        logger.info(format!(
            "n_vertices = {},  n_faces = {}",
            mesh.vertex_count(),
            mesh.face_count()
        ));
    }
}
