//! Integration tests for the rating replay.

use chrono::{DateTime, Duration, TimeZone, Utc};
use deck_battle_stats::{compute_ratings, rating_history, Battle, Deck, Side};

fn decks(ids: &[&str]) -> Vec<Deck> {
    ids.iter().map(|id| Deck::with_id(*id, id.to_uppercase())).collect()
}

fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap() + Duration::days(n)
}

fn win(winner: &str, loser: &str, date: DateTime<Utc>) -> Battle {
    Battle::new(winner, loser, Side::One, Side::One, date)
}

#[test]
fn single_game_moves_ratings_by_half_k() {
    let decks = decks(&["a", "b"]);
    let ratings = compute_ratings(&decks, &[win("a", "b", day(0))]);
    assert_eq!(ratings["a"].rating, 1516.0);
    assert_eq!(ratings["b"].rating, 1484.0);
    assert_eq!((ratings["a"].wins, ratings["a"].losses), (1, 0));
    assert_eq!((ratings["b"].wins, ratings["b"].losses), (0, 1));
}

#[test]
fn unplayed_deck_keeps_initial_rating() {
    let decks = decks(&["a", "b", "c"]);
    let ratings = compute_ratings(&decks, &[win("a", "b", day(0))]);
    assert_eq!(ratings["c"].rating, 1500.0);
    assert_eq!((ratings["c"].wins, ratings["c"].losses), (0, 0));
    assert!(compute_ratings(&decks, &[]).values().all(|r| r.rating == 1500.0));
}

#[test]
fn battles_are_replayed_by_date_not_log_order() {
    let decks = decks(&["a", "b"]);
    // Logged out of order: the later game comes first in the log.
    let mut later = win("b", "a", day(1));
    later.id = "later".into();
    let mut earlier = win("a", "b", day(0));
    earlier.id = "earlier".into();
    let battles = vec![later, earlier];

    let ratings = compute_ratings(&decks, &battles);
    assert_eq!(ratings["a"].rating, 1499.0);
    assert_eq!(ratings["b"].rating, 1501.0);

    let history = rating_history(&decks, &battles);
    let ids: Vec<_> = history.iter().map(|p| p.battle_id.as_str()).collect();
    assert_eq!(ids, ["earlier", "later"]);
    assert_eq!((history[0].deck1_rating, history[0].deck2_rating), (1516.0, 1484.0));
}

#[test]
fn equal_dates_keep_log_order() {
    let decks = decks(&["a", "b"]);
    let same = day(3);
    let a_first = vec![win("a", "b", same), win("b", "a", same)];
    let b_first = vec![win("b", "a", same), win("a", "b", same)];

    let r1 = compute_ratings(&decks, &a_first);
    assert_eq!((r1["a"].rating, r1["b"].rating), (1499.0, 1501.0));
    let r2 = compute_ratings(&decks, &b_first);
    assert_eq!((r2["a"].rating, r2["b"].rating), (1501.0, 1499.0));
}

#[test]
fn malformed_battles_are_skipped() {
    let decks = decks(&["a", "b"]);
    let orphan = win("a", "ghost", day(0));
    let mut undated = win("a", "b", day(1));
    undated.date = None;
    let mut no_score = win("a", "b", day(2));
    no_score.deck2_wins = None;
    let mirror = win("a", "a", day(3));
    let good = win("b", "a", day(4));

    let battles = vec![orphan, undated, no_score, mirror, good];
    let ratings = compute_ratings(&decks, &battles);
    assert_eq!(ratings["b"].rating, 1516.0);
    assert_eq!(ratings["a"].rating, 1484.0);
    assert_eq!((ratings["a"].wins, ratings["a"].losses), (0, 1));
    assert!(!ratings.contains_key("ghost"));
    assert_eq!(rating_history(&decks, &battles).len(), 1);
}

#[test]
fn repeated_calls_are_identical() {
    let decks = decks(&["a", "b", "c"]);
    let battles: Vec<Battle> = (0..30)
        .map(|i| {
            let (x, y) = match i % 3 {
                0 => ("a", "b"),
                1 => ("b", "c"),
                _ => ("c", "a"),
            };
            let winner = if i % 4 == 0 { Side::Two } else { Side::One };
            Battle::new(x, y, winner, Side::One, day(i / 2))
        })
        .collect();
    assert_eq!(compute_ratings(&decks, &battles), compute_ratings(&decks, &battles));
    assert_eq!(rating_history(&decks, &battles), rating_history(&decks, &battles));
}

#[test]
fn unresolved_record_goes_to_deck2_without_counting() {
    let decks = decks(&["a", "b"]);
    let mut unresolved = win("a", "b", day(0));
    unresolved.deck1_wins = Some(0);
    unresolved.deck2_wins = Some(0);
    unresolved.id = "draw-like".into();
    let battles = vec![unresolved];

    let ratings = compute_ratings(&decks, &battles);
    assert_eq!(ratings["a"].rating, 1484.0);
    assert_eq!(ratings["b"].rating, 1516.0);
    assert_eq!((ratings["a"].wins, ratings["a"].losses), (0, 0));
    assert_eq!((ratings["b"].wins, ratings["b"].losses), (0, 0));

    let history = rating_history(&decks, &battles);
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].battle_id, "draw-like");
    assert_eq!((history[0].deck1_rating, history[0].deck2_rating), (1484.0, 1516.0));
}

#[test]
fn out_of_range_win_counts_are_skipped() {
    let decks = decks(&["a", "b"]);
    let mut oversized = win("a", "b", day(0));
    oversized.deck1_wins = Some(u32::MAX);
    oversized.deck2_wins = Some(1);
    let battles = vec![oversized.clone(), oversized, win("a", "b", day(1))];

    let ratings = compute_ratings(&decks, &battles);
    assert_eq!(ratings["a"].rating, 1516.0);
    assert_eq!((ratings["a"].wins, ratings["a"].losses), (1, 0));
    assert_eq!((ratings["b"].wins, ratings["b"].losses), (0, 1));
    assert_eq!(rating_history(&decks, &battles).len(), 1);
}
