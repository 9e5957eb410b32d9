//! Runs small arithmetic batches through [`Parallel`] in both modes.

use anyhow::{anyhow, Result};
use clap::Parser;
use mesh_parallel::Parallel;

#[derive(Parser, Debug)]
#[command(name = "parallel_demo")]
#[command(about = "Ordered and unordered parallel task runs")]
struct Args {
    /// Worker threads.
    #[arg(long)]
    workers: Option<usize>,

    /// Collect results in completion order.
    #[arg(long)]
    unordered: bool,

    /// Append a multiply task with a zero factor, which fails.
    #[arg(long)]
    with_failure: bool,
}

fn add((x, y): (i64, i64)) -> Result<i64, String> {
    Ok(x + y)
}

fn multiply((x, y, z): (i64, i64, i64)) -> Result<i64, String> {
    if x == 0 {
        return Err("zero factor".to_string());
    }
    Ok(x * y * z)
}

fn run<A, F>(label: &str, variable: Vec<A>, function: F, args: &Args) -> Result<()>
where
    A: Clone + Send + 'static,
    F: Fn(A) -> Result<i64, String> + Send + Sync + 'static,
{
    let mut parallel = Parallel::new(variable, function);
    if let Some(workers) = args.workers {
        parallel = parallel.with_workers(workers);
    }

    print!("{}:", label);
    if args.unordered {
        let partial = parallel.launch_unordered()?;
        for result in &partial.results {
            print!(" {}", result);
        }
    } else {
        for result in parallel.launch()? {
            print!(" {}", result.map_err(|e| anyhow!("{}", e))?);
        }
    }
    println!();
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    run("add", vec![(1, 1), (2, 2), (3, 3)], add, &args)?;
    let mut factors = vec![(1, 1, 1), (2, 2, 2), (3, 3, 3)];
    if args.with_failure {
        factors.push((0, 4, 4));
    }
    run("multiply", factors, multiply, &args)?;
    Ok(())
}
