//! # Mesh Gen
//!
//! Planar triangle meshes of a padded rectangle with a boundary point cloud
//! cut out as a hole.
//!
//! ## Pipeline
//!
//! ```text
//! .xyz ─ read_point_cloud ─→ PointCloud
//!        add_shape ────────→ GeometryModel (outer rectangle + hole)
//!        synchronize/generate(2) ─→ MshMesh ─ write_msh ─→ .msh
//!        msh_to_obj ───────→ .obj
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mesh_gen::{add_shape, msh_to_obj, read_point_cloud, BoxDims, GeometryModel};
//! use mesh_io::write_msh;
//!
//! let cloud = read_point_cloud("boundary.xyz", None)?;
//! let mut model = GeometryModel::new("my_model");
//! add_shape(&mut model, &cloud.xs(), &cloud.ys(), BoxDims::default())?;
//! model.synchronize();
//! let mesh = model.generate(2)?;
//! write_msh("my_mesh.msh", &mesh)?;
//! msh_to_obj("my_mesh.msh", "my_mesh.obj", None)?;
//! # Ok::<(), mesh_gen::GenError>(())
//! ```

pub mod bbox;
pub mod convert;
pub mod error;
pub mod geometry;
pub mod shape;
mod triangulate;

pub use bbox::{bounding_box, BoxDims};
pub use convert::msh_to_obj;
pub use error::GenError;
pub use geometry::{GeometryModel, LineTag, LoopTag, MeshOptions, PointTag, SurfaceTag};
pub use mesh_io::read_point_cloud;
pub use shape::{add_polygon, add_shape};
