//! Engine configuration: the numeric policy constants with their defaults.

use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_RATING: f64 = 1500.0;
pub const DEFAULT_K_FACTOR: f64 = 32.0;
pub const DEFAULT_TRIANGLE_MIN_GAMES: u32 = 2;
pub const DEFAULT_TRIANGLE_MIN_WIN_RATE: f64 = 55.0;
pub const DEFAULT_FEW_GAMES_THRESHOLD: u32 = 5;
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Tunables for every engine component. Missing fields deserialize to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rating every deck starts from.
    #[serde(default = "default_initial_rating")]
    pub initial_rating: f64,
    /// Elo sensitivity.
    #[serde(default = "default_k_factor")]
    pub k_factor: f64,
    /// Each triangle leg needs at least this many games.
    #[serde(default = "default_triangle_min_games")]
    pub triangle_min_games: u32,
    /// Each triangle leg needs at least this win rate (percent, inclusive).
    #[serde(default = "default_triangle_min_win_rate")]
    pub triangle_min_win_rate: f64,
    /// Pairs with fewer games than this are `few_games`.
    #[serde(default = "default_few_games_threshold")]
    pub few_games_threshold: u32,
    #[serde(default = "default_unplayed_priority")]
    pub unplayed_priority: f64,
    #[serde(default = "default_few_games_base_priority")]
    pub few_games_base_priority: f64,
    /// Extra priority per missing game below the threshold.
    #[serde(default = "default_few_games_step")]
    pub few_games_step: f64,
    /// Priority per percentage point away from 50%.
    #[serde(default = "default_imbalance_weight")]
    pub imbalance_weight: f64,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

fn default_initial_rating() -> f64 {
    DEFAULT_INITIAL_RATING
}

fn default_k_factor() -> f64 {
    DEFAULT_K_FACTOR
}

fn default_triangle_min_games() -> u32 {
    DEFAULT_TRIANGLE_MIN_GAMES
}

fn default_triangle_min_win_rate() -> f64 {
    DEFAULT_TRIANGLE_MIN_WIN_RATE
}

fn default_few_games_threshold() -> u32 {
    DEFAULT_FEW_GAMES_THRESHOLD
}

fn default_unplayed_priority() -> f64 {
    1000.0
}

fn default_few_games_base_priority() -> f64 {
    500.0
}

fn default_few_games_step() -> f64 {
    50.0
}

fn default_imbalance_weight() -> f64 {
    10.0
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_rating: default_initial_rating(),
            k_factor: default_k_factor(),
            triangle_min_games: default_triangle_min_games(),
            triangle_min_win_rate: default_triangle_min_win_rate(),
            few_games_threshold: default_few_games_threshold(),
            unplayed_priority: default_unplayed_priority(),
            few_games_base_priority: default_few_games_base_priority(),
            few_games_step: default_few_games_step(),
            imbalance_weight: default_imbalance_weight(),
            suggestion_limit: default_suggestion_limit(),
        }
    }
}
