//! Emits one record at every level.

use anyhow::Result;
use clap::Parser;
use mesh_cli::LogArgs;

#[derive(Parser, Debug)]
#[command(name = "logger_demo")]
#[command(about = "Writes one log record per level")]
struct Args {
    #[command(flatten)]
    log: LogArgs,
}

fn main() -> Result<()> {
    let logger = Args::parse().log.launch()?;

    logger.debug("This is a DEBUG level log message");
    logger.info("This is an INFO level log message");
    logger.warning("This is a WARNING level log message");
    logger.error("This is an ERROR level log message");
    logger.critical("This is a CRITICAL level log message");
    Ok(())
}
