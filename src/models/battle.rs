//! Battle (one recorded game) and Side.

use crate::models::deck::DeckId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a battle.
pub type BattleId = String;

/// Which side of a battle record.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    #[default]
    One,
    Two,
}

/// A single game between two decks. Battles are append-only; the numeric fields are
/// optional because imported records may be incomplete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Battle {
    pub id: BattleId,
    pub deck1_id: DeckId,
    pub deck2_id: DeckId,
    /// 1 if deck 1 won, 0 otherwise. Both sides may be 0 for an unresolved entry.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub deck1_wins: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub deck2_wins: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub deck1_going_first: Option<u32>,
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub deck2_going_first: Option<u32>,
    /// None when the stored date could not be parsed.
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub memo: String,
    #[serde(default)]
    pub project_id: String,
}

impl Battle {
    /// Record a decided game between two decks.
    pub fn new(
        deck1_id: impl Into<DeckId>,
        deck2_id: impl Into<DeckId>,
        winner: Side,
        going_first: Side,
        date: DateTime<Utc>,
    ) -> Self {
        let flag = |side: Side, wanted: Side| Some(u32::from(side == wanted));
        Self {
            id: Uuid::new_v4().to_string(),
            deck1_id: deck1_id.into(),
            deck2_id: deck2_id.into(),
            deck1_wins: flag(winner, Side::One),
            deck2_wins: flag(winner, Side::Two),
            deck1_going_first: flag(going_first, Side::One),
            deck2_going_first: flag(going_first, Side::Two),
            date: Some(date),
            memo: String::new(),
            project_id: String::new(),
        }
    }

    /// Wins credited to deck 1 (missing counts as 0).
    pub fn deck1_wins(&self) -> u32 {
        self.deck1_wins.unwrap_or(0)
    }

    /// Wins credited to deck 2 (missing counts as 0).
    pub fn deck2_wins(&self) -> u32 {
        self.deck2_wins.unwrap_or(0)
    }

    /// True when a recorded win count is outside {0, 1}.
    pub fn has_malformed_score(&self) -> bool {
        [self.deck1_wins, self.deck2_wins]
            .iter()
            .any(|w| w.is_some_and(|w| w > 1))
    }

    /// Side that went first, if exactly one flag is set.
    pub fn going_first(&self) -> Option<Side> {
        match (
            self.deck1_going_first.unwrap_or(0),
            self.deck2_going_first.unwrap_or(0),
        ) {
            (1, 0) => Some(Side::One),
            (0, 1) => Some(Side::Two),
            _ => None,
        }
    }

    /// True when both sides name the same deck.
    pub fn is_mirror(&self) -> bool {
        self.deck1_id == self.deck2_id
    }
}
