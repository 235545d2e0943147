//! Battle log analytics: ratings, matrix, triangles, ranking, suggestions, turn order.
//!
//! Every function here is a pure function of its inputs.

mod matrix;
mod ranking;
mod rating;
mod suggestions;
mod triangles;
mod turn_order;

pub use matrix::{build_matrix, cell};
pub use ranking::rank_decks;
pub use rating::{
    compute_ratings, compute_ratings_with, expected_score, rating_history, rating_history_with,
};
pub use suggestions::{pick_suggestion, suggest_matchups, suggest_matchups_with};
pub use triangles::{find_triangles, find_triangles_with};
pub use turn_order::turn_order_stats;
