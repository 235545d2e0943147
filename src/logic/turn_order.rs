//! Results split by who went first.

use crate::models::{Battle, Deck, DeckId, Side, TurnOrderRecord};
use std::collections::BTreeMap;

/// Going-first and going-second records for every deck. Battles without a single
/// going-first flag, naming an unknown deck, pitting a deck against itself or carrying a
/// win count outside {0, 1} are ignored.
pub fn turn_order_stats(decks: &[Deck], battles: &[Battle]) -> BTreeMap<DeckId, TurnOrderRecord> {
    let mut stats: BTreeMap<DeckId, TurnOrderRecord> = decks
        .iter()
        .map(|d| (d.id.clone(), TurnOrderRecord::default()))
        .collect();

    for battle in battles {
        if battle.is_mirror()
            || battle.has_malformed_score()
            || !stats.contains_key(&battle.deck1_id)
            || !stats.contains_key(&battle.deck2_id)
        {
            continue;
        }
        let Some(first) = battle.going_first() else {
            continue;
        };
        let (w1, w2) = (battle.deck1_wins(), battle.deck2_wins());
        if let Some(r) = stats.get_mut(&battle.deck1_id) {
            let bucket = match first {
                Side::One => &mut r.going_first,
                Side::Two => &mut r.going_second,
            };
            bucket.record(w1, w2);
        }
        if let Some(r) = stats.get_mut(&battle.deck2_id) {
            let bucket = match first {
                Side::One => &mut r.going_second,
                Side::Two => &mut r.going_first,
            };
            bucket.record(w2, w1);
        }
    }
    stats
}
