//! Data structures: decks, battles, engine configuration and derived statistics.

mod battle;
mod config;
mod deck;
mod stats;

pub use battle::{Battle, BattleId, Side};
pub use config::EngineConfig;
pub use deck::{Deck, DeckId};
pub use stats::{
    win_rate_percent, CompatibilityCell, CompatibilityMatrix, DeckRating, RankedDeck, RankingMode,
    RatingPoint, Suggestion, SuggestionReason, Triangle, TurnOrderRecord, WinLoss,
};
