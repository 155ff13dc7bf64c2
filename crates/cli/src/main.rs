//! Preflight - host-readiness validator
//! Runs every host validation once and reports all findings before an install.

mod context;
mod output;
mod settings;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use preflight_core::application::Validator;
use preflight_core::domain::NodeProperties;
use preflight_core::AppError;
use preflight_infra_system::{HttpNetworkProbe, SystemProbeImpl};

use crate::context::ProcessContext;
use crate::output::{render_outcome, render_reading, OutputFormat};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Parser)]
#[command(name = "preflight")]
#[command(about = "Validate that this host can run the server before installing it", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Node properties file (TOML/YAML/JSON); defaults to ./preflight.toml if present
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, env = "PREFLIGHT_LOG_FORMAT", value_enum, default_value = "pretty")]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all host validations
    Validate {
        /// Report failures without aborting (overrides ignore_bootstrap_validations)
        #[arg(long)]
        ignore_validations: bool,

        /// Directory the server will be installed into
        #[arg(long)]
        install_path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print the host facts the validations are based on
    Probe {
        /// Directory the server will be installed into
        #[arg(long)]
        install_path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

fn init_logging(format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("preflight=info"))
        .context("Failed to create env filter")?;

    match format {
        LogFormat::Json => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Pretty => {
            // Interactive: human-readable
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

fn build_validator(properties: NodeProperties) -> Result<(Validator, Arc<ProcessContext>)> {
    let timeout = Duration::from_secs(properties.resources_package_timeout_secs);
    let context = Arc::new(ProcessContext::new(properties));
    let validator = Validator::new(
        context.clone(),
        Arc::new(SystemProbeImpl::new()),
        Arc::new(HttpNetworkProbe::new(timeout)?),
    );
    Ok((validator, context))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // 1. Initialize logging
    init_logging(cli.log_format)?;
    info!("Preflight v{} starting...", VERSION);

    // 2. Load node properties
    let mut properties = settings::load_properties(cli.config.as_deref())?;

    match cli.command {
        Commands::Validate {
            ignore_validations,
            install_path,
            format,
        } => {
            if ignore_validations {
                properties.ignore_bootstrap_validations = true;
            }
            if let Some(path) = install_path {
                properties.install_path = settings::expand_path(&path);
            }

            // 3. Wire dependencies and run
            let (validator, context) = build_validator(properties)?;
            let result = validator
                .validate_with(|outcome| match render_outcome(outcome, format) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => warn!(error = %e, "Failed to render validation outcome"),
                })
                .await;

            // 4. Failed validations exit non-zero; other errors propagate
            match result {
                Ok(_) => Ok(ExitCode::SUCCESS),
                Err(AppError::ValidationFailed(_)) if context.abort_message().is_some() => {
                    Ok(ExitCode::FAILURE)
                }
                Err(e) => Err(e.into()),
            }
        }

        Commands::Probe {
            install_path,
            format,
        } => {
            let install_path = install_path
                .map(|path| settings::expand_path(&path))
                .unwrap_or_else(|| properties.install_path.clone());

            let (validator, _) = build_validator(properties)?;
            let reading = validator.read_probes(&install_path)?;

            println!("{}", render_reading(&reading, format)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}
