mod error;
mod paths;
mod runner;

use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use formwatch_lib::PageConfig;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::error::CliError;
use crate::runner::Runner;

/// Replay an event script against the demo page and print what it did.
#[derive(Debug, Parser)]
#[command(name = "formwatch", version)]
struct Cli {
    /// Event script, one event per line. Reads stdin when omitted.
    script: Option<PathBuf>,

    /// Page config (JSON). Defaults to config.json in the config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file. Defaults to latest.log in the cache directory.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log at trace level.
    #[arg(long, short)]
    verbose: bool,

    /// Stop at the first line that fails.
    #[arg(long)]
    strict: bool,

    /// Print every touched element after the run.
    #[arg(long)]
    dump: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    let Some(path) = cli.log_file.clone().or_else(paths::log_file) else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let level = if cli.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(level, Config::default(), file) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: cannot create log file {}: {}", path.display(), e),
    }
}

fn load_config(cli: &Cli) -> Result<PageConfig, CliError> {
    if let Some(path) = &cli.config {
        return Ok(PageConfig::load(path)?);
    }
    match paths::config_file() {
        Some(path) if path.exists() => {
            log::info!("Using config {}", path.display());
            Ok(PageConfig::load(path)?)
        }
        _ => Ok(PageConfig::default()),
    }
}

/// Returns whether every line applied cleanly.
fn run(cli: &Cli) -> Result<bool, CliError> {
    let config = load_config(cli)?;
    let mut runner = Runner::in_memory(config, cli.strict);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = match &cli.script {
        Some(path) => {
            let file = File::open(path).map_err(|source| CliError::Script {
                path: path.clone(),
                source,
            })?;
            runner.run(BufReader::new(file), &mut out)?
        }
        None => runner.run(io::stdin().lock(), &mut out)?,
    };

    if cli.dump {
        writeln!(out)?;
        runner::dump(runner.page().host(), &mut out)?;
    }

    log::info!(
        "{} events applied, {} failed",
        summary.events,
        summary.errors.len()
    );
    if !summary.errors.is_empty() {
        eprintln!("{} line(s) failed", summary.errors.len());
    }
    Ok(summary.errors.is_empty())
}
