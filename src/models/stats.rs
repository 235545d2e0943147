//! Derived statistics produced by the engine. None of these are stored.

use crate::models::battle::BattleId;
use crate::models::deck::DeckId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Win rate in percent (0..=100); 0 when nothing was played.
pub fn win_rate_percent(wins: u32, losses: u32) -> f64 {
    let total = wins.saturating_add(losses);
    if total == 0 {
        0.0
    } else {
        wins as f64 / total as f64 * 100.0
    }
}

/// Rating and raw counters for one deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckRating {
    pub rating: f64,
    pub wins: u32,
    pub losses: u32,
}

/// Ratings of both decks right after one battle was applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingPoint {
    pub battle_id: BattleId,
    pub date: DateTime<Utc>,
    pub deck1_id: DeckId,
    pub deck2_id: DeckId,
    pub deck1_rating: f64,
    pub deck2_rating: f64,
}

/// Aggregate of one deck's results against one opponent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityCell {
    pub wins: u32,
    pub losses: u32,
    /// Percent; 0 when `total_games` is 0.
    pub win_rate: f64,
    pub total_games: u32,
}

impl CompatibilityCell {
    /// Cell with `total_games` and `win_rate` derived from the counts.
    pub fn from_counts(wins: u32, losses: u32) -> Self {
        Self {
            wins,
            losses,
            win_rate: win_rate_percent(wins, losses),
            total_games: wins.saturating_add(losses),
        }
    }
}

/// `matrix[deck][opponent]`; both directions of a pair are stored.
pub type CompatibilityMatrix = BTreeMap<DeckId, BTreeMap<DeckId, CompatibilityCell>>;

/// Three decks beating each other in a cycle: decks[0] → decks[1] → decks[2] → decks[0].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub decks: [DeckId; 3],
    /// Win rate of each leg, in cycle order.
    pub win_rates: [f64; 3],
}

impl Triangle {
    /// Mean of the three leg win rates.
    pub fn average_win_rate(&self) -> f64 {
        self.win_rates.iter().sum::<f64>() / 3.0
    }
}

/// How the ranking aggregates a deck's games.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMode {
    /// All games pooled.
    #[default]
    Plain,
    /// Mean of the per-opponent win rates.
    Normalized,
}

/// One row of the deck ranking.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedDeck {
    pub deck_id: DeckId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub total_games: u32,
    /// Opponents with at least one game.
    pub opponents: u32,
    /// Percent, computed according to the ranking mode.
    pub win_rate: f64,
}

/// Why a pair is suggested.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionReason {
    Unplayed,
    FewGames,
    UnbalancedWinrate,
}

/// A recommended matchup.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub deck1_id: DeckId,
    pub deck2_id: DeckId,
    pub reason: SuggestionReason,
    pub priority: f64,
    /// Deck 1's observed win rate against deck 2, when any game exists.
    pub win_rate: Option<f64>,
}

/// Wins and losses with the derived rate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
}

impl WinLoss {
    pub(crate) fn record(&mut self, wins: u32, losses: u32) {
        self.wins = self.wins.saturating_add(wins);
        self.losses = self.losses.saturating_add(losses);
        self.win_rate = win_rate_percent(self.wins, self.losses);
    }
}

/// A deck's results split by turn order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TurnOrderRecord {
    pub going_first: WinLoss,
    pub going_second: WinLoss,
}
