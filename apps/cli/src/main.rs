//! GigaPDF command-line client.
//!
//! Uploads a PDF to the summarization service in chunks and prints the
//! summary it returns.

mod config;
mod progress;
mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gigapdf_render::format_summary;
use gigapdf_transfer::{SourceFile, plan};
use gigapdf_upload::{HttpTransmitter, UploadCallbacks, UploadOrchestrator};
use tracing_subscriber::EnvFilter;

use config::Config;
use progress::{UploadProgress, format_bytes};

/// GigaPDF - summarize large PDFs
#[derive(Parser)]
#[command(name = "gigapdf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Chunk upload endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Chunk size in bytes
    #[arg(long, global = true)]
    chunk_size: Option<u64>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a PDF and print its summary
    Upload {
        /// PDF to upload
        file: PathBuf,

        /// Print the summary as HTML
        #[arg(long)]
        html: bool,

        /// Write the HTML summary to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Ask the service how far it got with a file
    Status {
        /// File name as it was uploaded
        filename: String,
    },

    /// Show how a file would be split into chunks
    Plan {
        /// File to plan
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the summary.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(cli.endpoint, cli.chunk_size, cli.timeout);

    match cli.command {
        Commands::Upload { file, html, output } => {
            upload(&file, html, output.as_deref(), &config).await
        }
        Commands::Status { filename } => status(&filename, &config).await,
        Commands::Plan { file } => show_plan(&file, &config),
    }
}

async fn upload(
    file: &Path,
    html: bool,
    output: Option<&Path>,
    config: &Config,
) -> anyhow::Result<()> {
    let source =
        SourceFile::open(file).with_context(|| format!("cannot open {}", file.display()))?;
    let upload_config = config.upload_config()?;
    let transmitter = HttpTransmitter::new(config.request_timeout())?;
    let orchestrator = UploadOrchestrator::new(Arc::new(transmitter));

    let progress = Arc::new(UploadProgress::new(source.name(), source.len()));
    let callbacks = UploadCallbacks::new().on_progress({
        let progress = Arc::clone(&progress);
        move |percent| progress.update(percent)
    });

    let run = orchestrator.run(Some(&source), &upload_config, &callbacks);
    tokio::pin!(run);

    let result = tokio::select! {
        result = &mut run => result,
        _ = tokio::signal::ctrl_c() => {
            tracing::warn!("interrupted, cancelling upload");
            orchestrator.cancel();
            run.await
        }
    };

    let summary = match result {
        Ok(summary) => {
            progress.finish();
            summary
        }
        Err(e) => {
            progress.abandon(&e.to_string());
            return Err(e.into());
        }
    };

    if let Some(path) = output {
        std::fs::write(path, format_summary(&summary))
            .with_context(|| format!("cannot write {}", path.display()))?;
        tracing::info!(path = %path.display(), "summary written");
    } else if html {
        println!("{}", format_summary(&summary));
    } else {
        println!("{}", render::to_terminal(&summary));
    }

    Ok(())
}

async fn status(filename: &str, config: &Config) -> anyhow::Result<()> {
    let endpoint = config.endpoint_url()?;
    let transmitter = HttpTransmitter::new(config.request_timeout())?;
    let progress = transmitter.progress(&endpoint, filename).await?;

    if progress.is_not_found() {
        anyhow::bail!("the service has no record of {filename:?}");
    }

    println!("{filename}: {}% {}", progress.progress_percent, progress.status);
    if let (Some(done), Some(total)) = (progress.uploaded_chunks, progress.total_chunks) {
        println!("chunks: {done}/{total}");
    }
    if !progress.summary.trim().is_empty() {
        println!();
        println!("{}", render::to_terminal(&progress.summary));
    }
    Ok(())
}

fn show_plan(file: &Path, config: &Config) -> anyhow::Result<()> {
    let source =
        SourceFile::open(file).with_context(|| format!("cannot open {}", file.display()))?;
    let chunk_plan = plan(source.len(), config.options.chunk_size)?;

    println!(
        "{}: {} in {} chunk(s) of {}",
        source.name(),
        format_bytes(source.len()),
        chunk_plan.total_chunks(),
        format_bytes(chunk_plan.chunk_size()),
    );
    for range in chunk_plan.iter() {
        println!(
            "  #{:<5} {:>14}..{:<14} {}",
            range.index,
            range.start,
            range.end,
            format_bytes(range.len())
        );
    }
    Ok(())
}
