use anyhow::Result;
use biosim_lib::Simulation;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Predator/prey simulation on a terrain grid", long_about = None)]
struct Args {
    /// Run files to simulate, `.sim` or `.toml`
    #[arg(required = true)]
    run_files: Vec<PathBuf>,

    /// Override the seed of every run file
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate this many years from the start year
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    years: Option<u32>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print each run's summary as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn run_one(path: &Path, args: &Args) -> Result<()> {
    let mut config = biosim_io::load_config(path)?;
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(years) = args.years {
        config.year_end = config.year_begin.saturating_add(years - 1);
    }

    let mut simulation = Simulation::load(config)?;
    let summary = simulation.run()?;
    if args.json {
        println!("{}", serde_json::to_string(&summary)?);
    } else {
        println!(
            "{}: years {}..={} done, {} births, {} deaths, {} eaten",
            path.display(),
            summary.year_begin,
            summary.year_end,
            summary.births,
            summary.deaths,
            summary.eaten
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    biosim_core::init_logging(&args.log_level);

    let mut failed = 0;
    for path in &args.run_files {
        if let Err(e) = run_one(path, &args) {
            eprintln!("{}: {e:#}", path.display());
            failed += 1;
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} runs failed", args.run_files.len());
    }
    Ok(())
}
