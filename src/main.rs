//! # Job Views CLI
//!
//! Renders read views from stored job records on disk and prints them as JSON.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use job_views::{
    JobConverter,
    config::ConfigLoader,
    converters,
    logs::{FileLogStore, LogFetchContext},
    models::{Job, SynchronousJobMetadata},
    telemetry,
    views::{DestinationDefinitionSummary, SourceDefinitionSummary},
};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

#[derive(Debug, Parser)]
#[command(name = "job-views", version, about = "Render job read views from stored records")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render a view of an asynchronous job record
    Render {
        #[arg(long, value_enum, default_value_t = ViewKind::Attempts)]
        kind: ViewKind,
        /// Path to the job record (JSON)
        job: PathBuf,
    },
    /// Render the view of a synchronous job from its metadata record
    Sync {
        /// Path to the synchronous job metadata (JSON)
        metadata: PathBuf,
    },
    /// Render the debug view of a job with its connector definitions
    Debug {
        /// Path to the job record (JSON)
        job: PathBuf,
        /// Path to the source definition summary (JSON)
        #[arg(long)]
        source: PathBuf,
        /// Path to the destination definition summary (JSON)
        #[arg(long)]
        destination: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewKind {
    /// Job without attempts
    Job,
    /// Job info without attempts
    Light,
    /// Job with attempt views
    Attempts,
    /// Job with attempts and their logs
    Full,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigLoader::new()
        .load()
        .context("loading configuration")?;
    telemetry::init_tracing(&config).context("initializing tracing")?;

    info!(profile = %config.profile, "Loaded configuration");
    debug!(config = %config.redacted_json().context("serializing configuration")?);

    let converter = JobConverter::new(
        Arc::new(FileLogStore::new()),
        LogFetchContext::from_config(&config),
    );

    let rendered = match cli.command {
        Command::Render { kind, job } => {
            let job: Job = read_json(&job).await?;
            match kind {
                ViewKind::Job => serde_json::to_value(converters::build_job_view(&job)?)?,
                ViewKind::Light => serde_json::to_value(converters::build_job_info_light(&job)?)?,
                ViewKind::Attempts => {
                    serde_json::to_value(converters::build_job_with_attempts(&job)?)?
                }
                ViewKind::Full => serde_json::to_value(
                    converter
                        .build_full_job_info(&job)
                        .await
                        .with_context(|| format!("building full job info for job {}", job.id))?,
                )?,
            }
        }
        Command::Sync { metadata } => {
            let metadata: SynchronousJobMetadata = read_json(&metadata).await?;
            serde_json::to_value(
                converter
                    .build_synchronous_job_view(&metadata)
                    .await
                    .with_context(|| format!("building synchronous job view {}", metadata.id))?,
            )?
        }
        Command::Debug {
            job,
            source,
            destination,
        } => {
            let job: Job = read_json(&job).await?;
            let source: SourceDefinitionSummary = read_json(&source).await?;
            let destination: DestinationDefinitionSummary = read_json(&destination).await?;
            let platform_version = config
                .platform_version()
                .context("parsing platform version")?;

            let job_info = converters::build_job_info_without_logs(&job)?;
            serde_json::to_value(converters::build_debug_job_view(
                &job_info,
                source,
                destination,
                &platform_version,
            ))?
        }
    };

    println!(
        "{}",
        serde_json::to_string_pretty(&rendered).context("serializing view")?
    );

    Ok(())
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}
