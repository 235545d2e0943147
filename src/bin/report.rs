//! Analytics report over exported deck and battle CSV files, printed as JSON.
//! Run with: cargo run --bin report
//! Env: DECKS_CSV (default decks.csv), BATTLES_CSV (default battles.csv),
//! PROJECT_ID (optional filter), ENGINE_CONFIG (optional JSON file),
//! RANKING_MODE (plain | normalized).

use deck_battle_stats::import::{for_project, read_battles_file, read_config_file, read_decks_file};
use deck_battle_stats::{
    build_matrix, compute_ratings_with, find_triangles_with, pick_suggestion, rank_decks,
    rating_history_with, suggest_matchups_with, turn_order_stats, EngineConfig, ImportError,
    RankingMode,
};
use serde_json::json;

fn default_decks_path() -> String {
    "decks.csv".to_string()
}

fn default_battles_path() -> String {
    "battles.csv".to_string()
}

fn ranking_mode_from_env() -> RankingMode {
    match std::env::var("RANKING_MODE").ok().as_deref() {
        Some("normalized") => RankingMode::Normalized,
        Some("plain") | None => RankingMode::Plain,
        Some(other) => {
            log::warn!("Unknown RANKING_MODE {:?}, using plain", other);
            RankingMode::Plain
        }
    }
}

fn run() -> Result<(), ImportError> {
    let decks_path = std::env::var("DECKS_CSV").unwrap_or_else(|_| default_decks_path());
    let battles_path = std::env::var("BATTLES_CSV").unwrap_or_else(|_| default_battles_path());
    let config = match std::env::var("ENGINE_CONFIG") {
        Ok(path) => read_config_file(&path)?,
        Err(_) => EngineConfig::default(),
    };
    let mode = ranking_mode_from_env();

    let mut decks = read_decks_file(&decks_path)?;
    let mut battles = read_battles_file(&battles_path)?;
    if let Ok(project_id) = std::env::var("PROJECT_ID") {
        (decks, battles) = for_project(decks, battles, &project_id);
    }
    log::info!(
        "Loaded {} deck(s) from {} and {} battle(s) from {}",
        decks.len(),
        decks_path,
        battles.len(),
        battles_path
    );

    let ratings = compute_ratings_with(&decks, &battles, &config);
    let history = rating_history_with(&decks, &battles, &config);
    let matrix = build_matrix(&decks, &battles);
    let triangles = find_triangles_with(&decks, &matrix, &config);
    let ranking = rank_decks(&decks, &battles, mode);
    let suggestions = suggest_matchups_with(&decks, &matrix, &config);
    let turn_order = turn_order_stats(&decks, &battles);
    let next = pick_suggestion(&suggestions, config.suggestion_limit, &mut rand::thread_rng());

    log::info!(
        "{} of {} battle(s) rated, {} triangle(s), {} suggestion(s)",
        history.len(),
        battles.len(),
        triangles.len(),
        suggestions.len()
    );

    let report = json!({
        "ratings": ratings,
        "rating_history": history,
        "matrix": matrix,
        "triangles": triangles,
        "ranking": ranking,
        "suggestions": suggestions,
        "turn_order": turn_order,
        "next_matchup": next,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
