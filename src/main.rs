use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Duration;

use hemingway::analysis::{AnalysisResult, Analyzer, MemoizedAnalyzer};
use hemingway::config::{self, Config};
use hemingway::{markdown, recording_cleanup, report, telemetry};

/// Analyze a markdown document for readability, complex words, long
/// sentences and passive voice
#[derive(Debug, Parser)]
#[command(name = "hemingway", version)]
struct Cli {
    /// Markdown document to analyze
    file: PathBuf,

    /// Print the analysis as JSON
    #[arg(long)]
    json: bool,

    /// Re-analyze whenever the document changes (Ctrl+C to exit)
    #[arg(long)]
    watch: bool,

    /// Analyze the file as-is instead of stripping markdown first
    #[arg(long)]
    raw: bool,

    /// Config file (defaults to ~/.hemingway.toml)
    #[arg(long, env = "HEMINGWAY_CONFIG")]
    config: Option<PathBuf>,
}

/// Poll interval for `--watch`
const WATCH_INTERVAL: Duration = Duration::from_millis(500);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    telemetry::init(&config.telemetry)?;
    tracing::info!(file = %cli.file.display(), "hemingway starting");

    clean_staging(&config.capture);

    let mut analyzer = MemoizedAnalyzer::new(Analyzer::from_config(&config.analysis));

    let text = read_document(&cli.file, cli.raw).await?;
    emit(analyzer.analyze(&text), cli.json)?;

    if !cli.watch {
        return Ok(());
    }

    tracing::info!("watching for changes (press Ctrl+C to exit)");
    let mut interval = tokio::time::interval(WATCH_INTERVAL);
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown signal received");
                break;
            }
            _ = interval.tick() => {
                let text = match read_document(&cli.file, cli.raw).await {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!("failed to re-read document: {e:#}");
                        continue;
                    }
                };
                if analyzer.is_cached(&text) {
                    continue;
                }
                tracing::debug!("document changed, re-analyzing");
                emit(analyzer.analyze(&text), cli.json)?;
            }
        }
    }

    Ok(())
}

async fn read_document(path: &Path, raw: bool) -> Result<String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(if raw {
        contents
    } else {
        markdown::to_plain_text(&contents)
    })
}

fn emit(result: &AnalysisResult, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(result).context("failed to serialize analysis")?;
        println!("{out}");
    } else {
        println!("{}", report::render(result));
    }
    Ok(())
}

/// Remove recordings a crashed capture left in the staging directory
fn clean_staging(capture: &config::CaptureConfig) {
    let dir = match Config::expand_path(&capture.staging_dir) {
        Ok(dir) => dir,
        Err(e) => {
            tracing::warn!("skipping staging cleanup: {e:#}");
            return;
        }
    };
    if let Err(e) = recording_cleanup::cleanup_stale_recordings(&dir, capture) {
        tracing::warn!("staging cleanup failed: {e:#}");
    }
}
