//! Deck data structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a deck. Opaque to the engine.
pub type DeckId = String;

/// A deck registered in a project.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    /// Color tags in display order.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub project_id: String,
}

impl Deck {
    /// Create a new deck with a fresh id, stamped with the current time.
    pub fn new(name: impl Into<String>, colors: Vec<String>, project_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            colors,
            image_url: None,
            created_at: Some(Utc::now()),
            project_id: project_id.into(),
        }
    }

    /// Deck with a caller-chosen id and no other metadata.
    pub fn with_id(id: impl Into<DeckId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            colors: Vec::new(),
            image_url: None,
            created_at: None,
            project_id: String::new(),
        }
    }
}
