//! Dataset persistence
//!
//! `games.json` is a pretty-printed JSON array of [`Game`] objects. Raw
//! catalog dumps are JSON arrays of the untouched payloads, so a fetch can
//! be replayed offline with `--input`.

use crate::assembler::{transform_raw_to_games, AdmissionStats};
use crate::models::Game;
use gtg_common::config::AdmissionConfig;
use gtg_common::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

fn write_pretty_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Write the dataset, creating parent directories as needed
pub fn write_games_json(path: &Path, games: &[Game]) -> Result<()> {
    write_pretty_json(path, games)?;
    info!("Wrote {} games to {}", games.len(), path.display());
    Ok(())
}

/// Read a dataset written by [`write_games_json`]
pub fn load_games_json(path: &Path) -> Result<Vec<Game>> {
    let reader = BufReader::new(File::open(path)?);
    let games: Vec<Game> = serde_json::from_reader(reader)?;
    Ok(games)
}

/// Save fetched payloads for later offline runs
pub fn write_raw_records(path: &Path, records: &[Value]) -> Result<()> {
    write_pretty_json(path, records)?;
    info!("Saved {} raw records to {}", records.len(), path.display());
    Ok(())
}

/// Load raw payloads from a dump
///
/// Accepts either a bare array or a catalog page object with `results`.
pub fn load_raw_records(path: &Path) -> Result<Vec<Value>> {
    let reader = BufReader::new(File::open(path)?);
    let value: Value = serde_json::from_reader(reader)?;
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut page) => match page.remove("results") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(Error::InvalidInput(format!(
                "{}: object has no `results` array",
                path.display()
            ))),
        },
        _ => Err(Error::InvalidInput(format!(
            "{}: expected a JSON array of records",
            path.display()
        ))),
    }
}

/// Assemble games from a raw dump instead of the network
pub fn assemble_from_file(
    path: &Path,
    config: AdmissionConfig,
) -> Result<(Vec<Game>, AdmissionStats)> {
    let records = load_raw_records(path)?;
    info!("Loaded {} raw records from {}", records.len(), path.display());
    Ok(transform_raw_to_games(&records, config))
}
