//! Command-line front end: solve a diagram read from a file or stdin.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trackwalk::{Solver, Symbols};

#[derive(Parser)]
#[command(name = "trackwalk")]
#[command(about = "Follow an ASCII track diagram from start to end")]
struct Cli {
    /// Diagram file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    /// Start marker
    #[arg(long, default_value_t = trackwalk::symbols::DEFAULT_START)]
    start: char,

    /// End marker
    #[arg(long, default_value_t = trackwalk::symbols::DEFAULT_END)]
    end: char,
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let input = read_input(cli.file.as_ref())?;
    let symbols = Symbols::builder().start(cli.start).end(cli.end).build()?;

    match Solver::with_symbols(symbols).try_solve(&input) {
        Ok(solution) => {
            info!(letters = %solution.letters, "diagram solved");
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&solution)?);
            } else {
                println!("{solution}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            warn!(reason = %err, "diagram has no solution");
            eprintln!("no solution");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}
