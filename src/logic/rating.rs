//! Elo rating replay over the battle log.
//!
//! Ratings are recomputed from scratch on every call: every deck starts at the
//! initial rating and the usable battles are applied oldest first. Battles sharing a
//! date keep their log order (stable sort).

use crate::models::{Battle, Deck, DeckId, DeckRating, EngineConfig, RatingPoint};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Expected score of a player rated `rating_a` against one rated `rating_b`.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / 400.0))
}

/// Ratings and win/loss counters for every deck, with default settings.
pub fn compute_ratings(decks: &[Deck], battles: &[Battle]) -> BTreeMap<DeckId, DeckRating> {
    compute_ratings_with(decks, battles, &EngineConfig::default())
}

pub fn compute_ratings_with(
    decks: &[Deck],
    battles: &[Battle],
    config: &EngineConfig,
) -> BTreeMap<DeckId, DeckRating> {
    replay(decks, battles, config).0
}

/// Post-game ratings of both decks for every battle applied, in replay order.
pub fn rating_history(decks: &[Deck], battles: &[Battle]) -> Vec<RatingPoint> {
    rating_history_with(decks, battles, &EngineConfig::default())
}

pub fn rating_history_with(
    decks: &[Deck],
    battles: &[Battle],
    config: &EngineConfig,
) -> Vec<RatingPoint> {
    replay(decks, battles, config).1
}

/// Battles usable for rating, paired with their date, in chronological order.
fn chronological<'a>(
    ratings: &BTreeMap<DeckId, DeckRating>,
    battles: &'a [Battle],
) -> Vec<(DateTime<Utc>, &'a Battle)> {
    let mut usable: Vec<(DateTime<Utc>, &Battle)> = battles
        .iter()
        .filter_map(|b| {
            if b.is_mirror() {
                log::debug!("battle {}: both sides are deck {}, skipped", b.id, b.deck1_id);
                return None;
            }
            if !ratings.contains_key(&b.deck1_id) || !ratings.contains_key(&b.deck2_id) {
                log::debug!("battle {}: unknown deck, skipped", b.id);
                return None;
            }
            if b.deck1_wins.is_none() || b.deck2_wins.is_none() || b.has_malformed_score() {
                log::debug!("battle {}: missing or malformed win count, skipped", b.id);
                return None;
            }
            match b.date {
                Some(date) => Some((date, b)),
                None => {
                    log::debug!("battle {}: no usable date, skipped", b.id);
                    None
                }
            }
        })
        .collect();
    // sort_by_key is stable: equal dates stay in log order
    usable.sort_by_key(|(date, _)| *date);
    usable
}

fn replay(
    decks: &[Deck],
    battles: &[Battle],
    config: &EngineConfig,
) -> (BTreeMap<DeckId, DeckRating>, Vec<RatingPoint>) {
    let mut ratings: BTreeMap<DeckId, DeckRating> = decks
        .iter()
        .map(|d| {
            (
                d.id.clone(),
                DeckRating {
                    rating: config.initial_rating,
                    wins: 0,
                    losses: 0,
                },
            )
        })
        .collect();

    let ordered = chronological(&ratings, battles);
    let mut history = Vec::with_capacity(ordered.len());

    for (date, battle) in ordered {
        let (Some(a), Some(b)) = (
            ratings.get(&battle.deck1_id).map(|r| r.rating),
            ratings.get(&battle.deck2_id).map(|r| r.rating),
        ) else {
            continue;
        };
        let deck1_wins = battle.deck1_wins();
        let deck2_wins = battle.deck2_wins();

        let expected_a = expected_score(a, b);
        let score_a = if deck1_wins > deck2_wins { 1.0 } else { 0.0 };
        // Rounded after every game, not at the end.
        let new_a = (a + config.k_factor * (score_a - expected_a)).round();
        let new_b = (b + config.k_factor * ((1.0 - score_a) - (1.0 - expected_a))).round();

        if let Some(r) = ratings.get_mut(&battle.deck1_id) {
            r.rating = new_a;
            r.wins = r.wins.saturating_add(deck1_wins);
            r.losses = r.losses.saturating_add(deck2_wins);
        }
        if let Some(r) = ratings.get_mut(&battle.deck2_id) {
            r.rating = new_b;
            r.wins = r.wins.saturating_add(deck2_wins);
            r.losses = r.losses.saturating_add(deck1_wins);
        }

        history.push(RatingPoint {
            battle_id: battle.id.clone(),
            date,
            deck1_id: battle.deck1_id.clone(),
            deck2_id: battle.deck2_id.clone(),
            deck1_rating: new_a,
            deck2_rating: new_b,
        });
    }

    (ratings, history)
}
