use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use rowstore::repl::DEFAULT_PROMPT;
use rowstore::{Repl, ReplConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// In-memory row store with an interactive prompt
#[derive(Parser, Debug)]
#[command(name = "rowstore", version, about)]
struct Args {
    /// Prompt printed before each input line
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Read commands from FILE instead of stdin
    #[arg(short = 'f', long, value_name = "FILE")]
    file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = ReplConfig {
        prompt: args.prompt,
    };
    let stdout = io::stdout().lock();

    match &args.file {
        Some(path) => {
            info!(path = %path.display(), "reading commands from file");
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            Repl::new(BufReader::new(file), stdout, config).run()?;
        }
        None => {
            Repl::new(io::stdin().lock(), stdout, config).run()?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("rowstore=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rowstore=warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
