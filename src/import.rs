//! CSV import of deck and battle exports.
//!
//! Battle rows are read leniently: empty or unparseable numbers and dates become
//! `None` and are dealt with by the engine, so one bad cell never fails the import.

use crate::models::{Battle, Deck, EngineConfig};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

/// Errors from reading exports or configuration.
#[derive(Debug)]
pub enum ImportError {
    /// File could not be opened or read.
    Io(std::io::Error),
    /// Malformed CSV (bad structure, missing required column).
    Csv(csv::Error),
    /// Malformed JSON configuration.
    Json(serde_json::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(e) => write!(f, "I/O error: {}", e),
            ImportError::Csv(e) => write!(f, "CSV error: {}", e),
            ImportError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(e) => Some(e),
            ImportError::Csv(e) => Some(e),
            ImportError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(e: std::io::Error) -> Self {
        ImportError::Io(e)
    }
}

impl From<csv::Error> for ImportError {
    fn from(e: csv::Error) -> Self {
        ImportError::Csv(e)
    }
}

impl From<serde_json::Error> for ImportError {
    fn from(e: serde_json::Error) -> Self {
        ImportError::Json(e)
    }
}

/// Deck row as exported: colors are one `;`-separated cell.
#[derive(Deserialize)]
struct DeckRow {
    id: String,
    name: String,
    #[serde(default)]
    colors: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    project_id: String,
}

impl From<DeckRow> for Deck {
    fn from(row: DeckRow) -> Self {
        Deck {
            id: row.id,
            name: row.name,
            colors: row
                .colors
                .split(';')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect(),
            image_url: row.image_url.filter(|u| !u.is_empty()),
            created_at: row.created_at,
            project_id: row.project_id,
        }
    }
}

/// Read decks from CSV with a header row.
pub fn read_decks<R: Read>(reader: R) -> Result<Vec<Deck>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut decks = Vec::new();
    for row in rdr.deserialize::<DeckRow>() {
        decks.push(row?.into());
    }
    Ok(decks)
}

/// Read battles from CSV with a header row, in file order.
pub fn read_battles<R: Read>(reader: R) -> Result<Vec<Battle>, ImportError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut battles = Vec::new();
    for row in rdr.deserialize::<Battle>() {
        battles.push(row?);
    }
    Ok(battles)
}

pub fn read_decks_file(path: impl AsRef<Path>) -> Result<Vec<Deck>, ImportError> {
    read_decks(std::fs::File::open(path)?)
}

pub fn read_battles_file(path: impl AsRef<Path>) -> Result<Vec<Battle>, ImportError> {
    read_battles(std::fs::File::open(path)?)
}

/// Load an `EngineConfig` from a JSON file; absent fields take their defaults.
pub fn read_config_file(path: impl AsRef<Path>) -> Result<EngineConfig, ImportError> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Keep only the decks and battles owned by `project_id`.
pub fn for_project(decks: Vec<Deck>, battles: Vec<Battle>, project_id: &str) -> (Vec<Deck>, Vec<Battle>) {
    let decks = decks.into_iter().filter(|d| d.project_id == project_id).collect();
    let battles = battles.into_iter().filter(|b| b.project_id == project_id).collect();
    (decks, battles)
}
