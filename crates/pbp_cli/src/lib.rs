//! Point-by-point dataset loader
//!
//! CSV (one match per row, header row required) → `MatchDataset`.
//! Column order is free; columns are matched by header name.

use anyhow::{Context, Result};
use pbp_core::{AnalyzerConfig, MatchDataset};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::info;

/// One line of the `list` command.
#[derive(Debug, Clone, Serialize)]
pub struct MatchListing {
    pub index: usize,
    pub date: String,
    pub tny_name: String,
    pub server1: String,
    pub server2: String,
    pub score: String,
    pub has_notation: bool,
}

pub fn load_dataset(csv_path: &Path) -> Result<MatchDataset> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;
    let dataset = read_dataset(file)
        .with_context(|| format!("Failed to load matches from {}", csv_path.display()))?;
    info!(path = %csv_path.display(), matches = dataset.len(), "dataset loaded");
    Ok(dataset)
}

pub fn read_dataset<R: Read>(input: R) -> Result<MatchDataset> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).flexible(true).from_reader(input);
    let headers = reader.headers().context("Failed to read CSV header row")?.clone();

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Invalid CSV row {}", line + 2))?;
        let row: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.trim().to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(MatchDataset::from_rows(rows)?)
}

pub fn list_matches(dataset: &MatchDataset) -> Vec<MatchListing> {
    dataset
        .records()
        .iter()
        .enumerate()
        .map(|(index, record)| MatchListing {
            index,
            date: record.date.clone(),
            tny_name: record.tny_name.clone(),
            server1: record.server1.clone(),
            server2: record.server2.clone(),
            score: record.score.clone(),
            has_notation: record.has_notation(),
        })
        .collect()
}

/// Explicit `--config` path, else `PBP_CONFIG_PATH`, else defaults.
pub fn resolve_config(path: Option<&Path>) -> Result<AnalyzerConfig> {
    match path {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => AnalyzerConfig::from_env().context("Failed to load config from environment"),
    }
}
