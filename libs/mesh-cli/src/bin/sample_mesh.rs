//! Samples points uniformly by area over the surface of a mesh.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use config::constants::{DEFAULT_SAMPLE_INPUT, DEFAULT_SAMPLE_OUTPUT, DEFAULT_SAMPLE_POINTS};
use mesh_cli::{exit_on_mismatch, LogArgs};
use mesh_io::{read_mesh, read_obj, read_off, save_xyz, MeshFormat};
use mesh_sample::{sample_from_mesh, SampleOptions};

/// Mesh (.off or .obj) → sampled points (.xyz).
#[derive(Parser, Debug)]
#[command(name = "sample_mesh")]
#[command(about = "Samples points from the surface of a mesh")]
struct Args {
    /// Mesh to sample (.off or .obj).
    #[arg(short, long, default_value = DEFAULT_SAMPLE_INPUT)]
    input: PathBuf,

    /// Point file to write (.xyz).
    #[arg(short, long, default_value = DEFAULT_SAMPLE_OUTPUT)]
    output: PathBuf,

    /// Number of points requested over the whole surface.
    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_POINTS)]
    samples: usize,

    /// Seed for reproducible sampling.
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads.
    #[arg(long)]
    workers: Option<usize>,

    /// Read the input as this format regardless of its extension.
    #[arg(long, value_parser = ["off", "obj"])]
    format: Option<String>,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let logger = args.log.launch()?;

    let mesh = match args.format.as_deref() {
        Some("obj") => read_mesh(&args.input, MeshFormat::Obj, Some(&logger))?,
        Some(_) => read_mesh(&args.input, MeshFormat::Off, Some(&logger))?,
        None => match MeshFormat::from_path(&args.input) {
            Some(MeshFormat::Obj) => exit_on_mismatch(read_obj(&args.input, Some(&logger)))?,
            _ => exit_on_mismatch(read_off(&args.input, Some(&logger)))?,
        },
    };

    let options = SampleOptions {
        total_samples: args.samples,
        seed: args.seed,
        workers: args.workers,
    };
    let points = sample_from_mesh(&mesh, Some(&logger), &options)?;
    exit_on_mismatch(save_xyz(&args.output, &points, Some(&logger)))?;
    Ok(())
}
