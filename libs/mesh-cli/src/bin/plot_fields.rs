//! Paints solver result fields onto the generated mesh.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use config::constants::{DEFAULT_PLOT_DIR, DEFAULT_PLOT_MSH, DEFAULT_PLOT_OBJ, DEFAULT_RESULTS_FILE};
use mesh_cli::LogArgs;
use mesh_plot::{plot_results, PlotPaths};

/// Mesh + results table → one colored PLY per field.
#[derive(Parser, Debug)]
#[command(name = "plot_fields")]
#[command(about = "Exports p, |U|, u and v as colored meshes")]
struct Args {
    /// Generated mesh (.msh).
    #[arg(long, default_value = DEFAULT_PLOT_MSH)]
    msh: PathBuf,

    /// Intermediate OBJ file.
    #[arg(long, default_value = DEFAULT_PLOT_OBJ)]
    obj: PathBuf,

    /// Solver results (.csv).
    #[arg(short, long, default_value = DEFAULT_RESULTS_FILE)]
    results: PathBuf,

    /// Output directory.
    #[arg(short, long, default_value = DEFAULT_PLOT_DIR)]
    out_dir: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let logger = args.log.launch()?;

    let paths = PlotPaths {
        msh: args.msh,
        obj: args.obj,
        results: args.results,
        out_dir: args.out_dir,
    };
    for path in plot_results(&paths, Some(&logger))? {
        println!("{}", path.display());
    }
    Ok(())
}
