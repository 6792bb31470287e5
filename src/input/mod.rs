use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::{info, warn};

pub mod json;
pub mod tsv;

use crate::model::MutationalCount;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Tsv,
    Json,
}

/// Format from the file name, ignoring a trailing `.gz`.
pub fn detect_format(path: &Path) -> InputFormat {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let stem = name.strip_suffix(".gz").unwrap_or(&name);
    if stem.ends_with(".json") {
        InputFormat::Json
    } else {
        InputFormat::Tsv
    }
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Loads a counts table, optionally restricted to one sample.
pub fn load_counts(path: &Path, sample: Option<&str>) -> Result<Vec<MutationalCount>, InputError> {
    let reader = open_maybe_gz(path)?;
    let source = path.display().to_string();
    let counts = match detect_format(path) {
        InputFormat::Tsv => tsv::parse_counts_tsv(reader, &source)?,
        InputFormat::Json => json::parse_counts_json(reader, &source)?,
    };
    info!(path = %source, rows = counts.len(), "counts table loaded");

    let counts = match sample {
        Some(id) => filter_sample(counts, id),
        None => counts,
    };
    if counts.is_empty() {
        return Err(InputError::InvalidInput(match sample {
            Some(id) => format!("no rows for sample '{}' in {}", id, source),
            None => format!("{} contains no count rows", source),
        }));
    }
    Ok(counts)
}

pub fn filter_sample(counts: Vec<MutationalCount>, sample_id: &str) -> Vec<MutationalCount> {
    let before = counts.len();
    let kept: Vec<MutationalCount> = counts
        .into_iter()
        .filter(|c| c.sample_id == sample_id)
        .collect();
    if kept.len() < before {
        warn!(
            sample = sample_id,
            kept = kept.len(),
            dropped = before - kept.len(),
            "rows from other samples dropped"
        );
    }
    kept
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
