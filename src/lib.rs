//! Card game battle log analytics: library with models, the analytics engine and CSV import.

pub mod import;
pub mod logic;
pub mod models;

pub use import::ImportError;
pub use logic::{
    build_matrix, compute_ratings, compute_ratings_with, expected_score, find_triangles,
    find_triangles_with, pick_suggestion, rank_decks, rating_history, rating_history_with,
    suggest_matchups, suggest_matchups_with, turn_order_stats,
};
pub use models::{
    Battle, BattleId, CompatibilityCell, CompatibilityMatrix, Deck, DeckId, DeckRating,
    EngineConfig, RankedDeck, RankingMode, RatingPoint, Side, Suggestion, SuggestionReason,
    Triangle, TurnOrderRecord, WinLoss,
};
