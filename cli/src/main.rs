//! CLI entrypoint for medley
//!
//! Composition root: loads configuration, assembles the provider
//! cohort, runs one orchestrated turn, and prints the result. No
//! conversation storage lives here — callers that persist turns wire
//! the use case into their own stack.

mod output;

use anyhow::{Result, bail};
use clap::Parser;
use medley_application::{HandleTurnInput, HandleTurnUseCase, SelectionMode};
use medley_infrastructure::{ConfigLoader, build_providers};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "medley", about = "Ask several model providers at once and keep the best answer", version)]
struct Cli {
    /// The user message to orchestrate
    message: Option<String>,

    /// Path to a config file (otherwise ./medley.toml or the XDG config)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Ignore config files and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Override the selection policy
    #[arg(long, value_enum)]
    policy: Option<SelectionModeArg>,

    /// Override the global timeout, in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Emit the full orchestration result as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Mirror of [`SelectionMode`] that clap can parse from the command line.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SelectionModeArg {
    Priority,
    Judge,
}

impl From<SelectionModeArg> for SelectionMode {
    fn from(arg: SelectionModeArg) -> Self {
        match arg {
            SelectionModeArg::Priority => SelectionMode::Priority,
            SelectionModeArg::Judge => SelectionMode::Judge,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let message = match cli.message {
        Some(m) if !m.trim().is_empty() => m,
        _ => bail!("A non-empty message is required."),
    };

    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?
    };

    if let Some(policy) = cli.policy {
        config.orchestrator.policy = policy.into();
    }
    if let Some(secs) = cli.timeout_secs {
        config.orchestrator.timeout_secs = secs;
    }

    info!("starting medley");

    // === Dependency Injection ===
    let providers = build_providers(&config);
    let use_case = HandleTurnUseCase::new(providers, config.orchestrator_config());

    let input = HandleTurnInput::new(config.system_prompt(), vec![], message);
    let result = use_case.execute(input).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_result(&result);
    }

    Ok(())
}
