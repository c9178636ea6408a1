//! gtg-dataset - corpus builder for the game guessing game
//!
//! Fetches popular games from the RAWG catalog (or a saved raw dump),
//! classifies them into fixed-schema entries, samples the corpus down to a
//! target size and writes `games.json`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use gtg_common::config::{load_toml_config, resolve_config_path, LoggingConfig, CONFIG_ENV_VAR};
use gtg_dataset::config::{resolve_rawg_api_key, BuildSettings, CliOverrides};
use gtg_dataset::output::{load_raw_records, write_games_json, write_raw_records};
use gtg_dataset::{sample_games_seeded, Assembler, RawgClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for gtg-dataset
#[derive(Parser, Debug)]
#[command(name = "gtg-dataset")]
#[command(about = "Build the game guessing game dataset from the RAWG catalog")]
#[command(version)]
struct Args {
    /// Config file (TOML); falls back to $GTG_CONFIG, then the user config dir
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output dataset path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of games kept after sampling
    #[arg(short, long)]
    target_size: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    seed: Option<u64>,

    /// Assemble from a saved raw dump instead of querying RAWG
    #[arg(short, long, conflicts_with = "raw_dump")]
    input: Option<PathBuf>,

    /// Save fetched raw records to this path
    #[arg(long)]
    raw_dump: Option<PathBuf>,
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("gtg_dataset={}", logging.level).into());

    let file_layer = match &logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };
    let stderr_layer = logging
        .file
        .is_none()
        .then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before the subscriber exists so its logging section
    // can take effect; the origin is logged right after.
    let config_path = resolve_config_path(args.config.as_deref(), CONFIG_ENV_VAR);
    let (toml_config, config_origin) = load_toml_config(config_path.as_deref());

    init_tracing(&toml_config.logging)?;

    info!(
        "Starting gtg-dataset v{} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP")
    );
    config_origin.log();

    let settings = BuildSettings::resolve(
        &toml_config,
        &CliOverrides {
            output_path: args.output,
            target_size: args.target_size,
        },
    );

    // Step 1: Raw records
    let raw_games = match &args.input {
        Some(input) => load_raw_records(input)
            .with_context(|| format!("Failed to load raw records from {}", input.display()))?,
        None => {
            let api_key = resolve_rawg_api_key(&toml_config).context("Cannot query RAWG")?;
            let client = RawgClient::new(api_key, settings.fetch.clone())
                .context("Failed to create RAWG client")?;
            let raw_games = client.fetch_all().await.context("RAWG fetch failed")?;

            if let Some(dump) = &args.raw_dump {
                write_raw_records(dump, &raw_games)
                    .with_context(|| format!("Failed to write raw dump {}", dump.display()))?;
            }
            raw_games
        }
    };
    info!("Raw records: {}", raw_games.len());

    // Step 2: Admission and classification
    let mut assembler = Assembler::new(settings.admission);
    let games = assembler.assemble_all(&raw_games);
    let stats = assembler.stats();
    info!("After filtering: {} games", games.len());
    info!(
        missing_title = stats.missing_title,
        missing_release_year = stats.missing_release_year,
        too_old = stats.too_old,
        too_niche = stats.too_niche,
        no_known_platform = stats.no_known_platform,
        "Rejected {} of {} records",
        stats.rejected(),
        stats.total()
    );

    // Step 3: Sampling
    let corpus = sample_games_seeded(games, settings.target_size, args.seed);
    info!("Sampled games: {}", corpus.len());

    // Step 4: Output
    write_games_json(&settings.output_path, &corpus).with_context(|| {
        format!(
            "Failed to write dataset to {}",
            settings.output_path.display()
        )
    })?;

    info!("Dataset written to {}", settings.output_path.display());
    Ok(())
}
