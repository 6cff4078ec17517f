//! Storefront configuration CLI.
//!
//! Resolves the backend configuration exactly the way the service does at
//! startup and reports the result, so a deployment can be validated before
//! rollout. Any configuration error exits non-zero.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storefront_config::{load_env_file, report, EnvSnapshot, Settings};

#[derive(Parser)]
#[command(name = "storefrontctl")]
#[command(version, about = "Storefront backend configuration tool", long_about = None)]
struct Cli {
    /// Project base directory (where .env and the static roots live)
    #[arg(long, default_value = ".")]
    base_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the configuration, exiting non-zero on any configuration error
    /// Examples:
    ///     storefrontctl check
    ///     storefrontctl --base-dir /srv/storefront check
    #[command(verbatim_doc_comment)]
    Check,

    /// Print the resolved configuration with secrets redacted
    /// Examples:
    ///     storefrontctl show
    ///     storefrontctl show --json
    #[command(verbatim_doc_comment)]
    Show {
        /// Emit JSON instead of the log summary
        #[arg(short, long)]
        json: bool,
    },
}

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,storefront_config=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn run(cli: Cli) -> Result<()> {
    // Mirror the service's startup order: .env first, then one snapshot.
    let status = load_env_file(&cli.base_dir);
    let snapshot = EnvSnapshot::capture();
    let settings = Settings::resolve(&snapshot, &cli.base_dir, status.path())?;

    match cli.command {
        Commands::Check => {
            report::log_startup_summary(&settings);
            tracing::info!("configuration ok");
        }
        Commands::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&settings)?);
            } else {
                report::log_startup_summary(&settings);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "configuration invalid");
            ExitCode::FAILURE
        }
    }
}
