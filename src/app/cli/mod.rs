//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, CandidatesOutcome, CreateMode, SwitchOptions, SwitchOutcome};
use crate::domain::AppError;

const DEFAULT_LOG_DIRECTIVE: &str = "spec_switch=warn";

#[derive(Parser)]
#[command(name = "spec-switch")]
#[command(version)]
#[command(
    about = "Jump between a source file and its spec file",
    long_about = None
)]
struct Cli {
    /// Log filter directive (overrides RUST_LOG), e.g. `spec_switch=debug`
    #[arg(long, global = true, value_parser = parse_log_directive)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the counterpart of FILE, creating it when missing
    #[clap(visible_alias = "s")]
    Switch {
        /// Source or spec file to switch from (a symlink maps from where it sits)
        file: PathBuf,
        /// Project root (default: nearest directory with package.json, tsconfig.json or .git)
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Create a missing counterpart without asking
        #[arg(short = 'y', long, conflicts_with = "no_create")]
        yes: bool,
        /// Never create a missing counterpart
        #[arg(short = 'n', long, conflicts_with = "yes")]
        no_create: bool,
        /// Open the counterpart in $VISUAL/$EDITOR instead of printing its path
        #[arg(short, long)]
        open: bool,
    },
    /// Print the counterpart candidates of FILE without creating anything
    #[clap(visible_alias = "c")]
    Candidates {
        /// Source or spec file to inspect
        file: PathBuf,
        /// Project root (default: nearest directory with package.json, tsconfig.json or .git)
        #[arg(short, long)]
        root: Option<PathBuf>,
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    let result: Result<(), AppError> = match cli.command {
        Commands::Switch { file, root, yes, no_create, open } => {
            run_switch(file, root, create_mode(yes, no_create), open)
        }
        Commands::Candidates { file, root, json } => run_candidates(file, root, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn parse_log_directive(value: &str) -> Result<String, String> {
    EnvFilter::try_new(value).map(|_| value.to_string()).map_err(|err| err.to_string())
}

fn init_logging(directive: Option<&str>) {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive).ok(),
        None => match std::env::var("RUST_LOG") {
            Ok(value) => EnvFilter::try_new(&value)
                .map_err(|err| eprintln!("⚠️ Ignoring invalid RUST_LOG '{}': {}", value, err))
                .ok(),
            Err(_) => None,
        },
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn create_mode(yes: bool, no_create: bool) -> CreateMode {
    match (yes, no_create) {
        (true, _) => CreateMode::Always,
        (_, true) => CreateMode::Never,
        _ => CreateMode::Prompt,
    }
}

fn run_switch(
    file: PathBuf,
    root: Option<PathBuf>,
    create: CreateMode,
    open_in_editor: bool,
) -> Result<(), AppError> {
    let outcome = api::switch(SwitchOptions { file, root, create, open_in_editor })?;

    // The presenter already printed or opened the file; skips stay silent.
    if let SwitchOutcome::Declined { path } = &outcome {
        eprintln!("ℹ️ {} was not created", path.display());
    }
    Ok(())
}

fn run_candidates(file: PathBuf, root: Option<PathBuf>, json: bool) -> Result<(), AppError> {
    let outcome = api::candidates(file, root)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        CandidatesOutcome::Mapped { root, candidates, .. } => {
            for candidate in candidates {
                let marker = if candidate.exists { "✅" } else { "  " };
                println!("{} {}", marker, root.join(&candidate.path).display());
            }
        }
        CandidatesOutcome::Skipped { reason } => {
            eprintln!("ℹ️ Nothing to map: {}", reason);
        }
    }
    Ok(())
}
