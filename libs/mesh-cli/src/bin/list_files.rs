//! Lists the regular files directly inside a folder.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use config::constants::DEFAULT_FILE_FOLDER;
use mesh_cli::LogArgs;
use mesh_io::get_all_files;

#[derive(Parser, Debug)]
#[command(name = "list_files")]
#[command(about = "Lists the files of a folder")]
struct Args {
    /// Folder to list.
    #[arg(default_value = DEFAULT_FILE_FOLDER)]
    folder: PathBuf,

    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let logger = args.log.launch()?;

    for file in get_all_files(&args.folder, Some(&logger))? {
        println!("{}", file.display());
    }
    Ok(())
}
