//! Meshes the padded rectangle around a boundary point cloud.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{
    DEFAULT_BOUNDARY_FILE, DEFAULT_MODEL_NAME, DEFAULT_MSH_FILE, DEFAULT_OBJ_FILE,
    DEFAULT_X_LENGTH, DEFAULT_Y_LENGTH, MESH_DIMENSION,
};
use mesh_cli::{exit_on_mismatch, LogArgs};
use mesh_gen::{add_shape, msh_to_obj, read_point_cloud, BoxDims, GeometryModel, MeshOptions};
use mesh_io::write_msh;

/// Boundary point cloud → Gmsh mesh → OBJ.
#[derive(Parser, Debug)]
#[command(name = "gen_mesh")]
#[command(about = "Meshes the domain around a boundary point cloud")]
struct Args {
    /// Boundary point cloud (.xyz).
    #[arg(short, long, default_value = DEFAULT_BOUNDARY_FILE)]
    input: PathBuf,

    /// Mesh file to write (.msh).
    #[arg(long, default_value = DEFAULT_MSH_FILE)]
    msh: PathBuf,

    /// OBJ file to write.
    #[arg(long, default_value = DEFAULT_OBJ_FILE)]
    obj: PathBuf,

    /// Width of the meshing domain.
    #[arg(long, default_value_t = DEFAULT_X_LENGTH)]
    x_length: f64,

    /// Height of the meshing domain.
    #[arg(long, default_value_t = DEFAULT_Y_LENGTH)]
    y_length: f64,

    /// Maximum boundary segment length.
    #[arg(long)]
    mesh_size: Option<f64>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let logger = args.log.launch()?;

    let mut model = GeometryModel::new(DEFAULT_MODEL_NAME);
    model.set_options(MeshOptions {
        mesh_size: args.mesh_size,
    })?;

    let cloud = exit_on_mismatch(read_point_cloud(&args.input, Some(&logger)))?;
    let dims = BoxDims {
        x_length: args.x_length,
        y_length: args.y_length,
    };
    add_shape(&mut model, &cloud.xs(), &cloud.ys(), dims)
        .with_context(|| format!("Adding shape of {}", args.input.display()))?;

    model.synchronize();
    let mesh = model.generate(MESH_DIMENSION)?;
    logger.debug(format!(
        "generated {} nodes and {} cells",
        mesh.nodes().len(),
        mesh.cells().len()
    ));

    write_msh(&args.msh, &mesh)?;
    msh_to_obj(&args.msh, &args.obj, Some(&logger))?;
    Ok(())
}
