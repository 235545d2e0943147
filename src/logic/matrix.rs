//! Compatibility matrix: win/loss aggregates for every ordered pair of decks.

use crate::models::{Battle, CompatibilityCell, CompatibilityMatrix, Deck};
use std::collections::BTreeMap;

/// Build the matrix for all decks. Every ordered pair of distinct decks gets a cell,
/// zeroed when the pair never played. Battles naming an unknown deck, or with a win
/// count outside {0, 1}, are ignored.
pub fn build_matrix(decks: &[Deck], battles: &[Battle]) -> CompatibilityMatrix {
    let mut matrix: CompatibilityMatrix = BTreeMap::new();
    for deck in decks {
        let row = matrix.entry(deck.id.clone()).or_default();
        for opponent in decks {
            if opponent.id != deck.id {
                row.insert(opponent.id.clone(), CompatibilityCell::default());
            }
        }
    }

    for battle in battles {
        let deck1_wins = battle.deck1_wins();
        let deck2_wins = battle.deck2_wins();
        // Both cells must exist; mirror battles and orphans have none.
        let known = matrix
            .get(&battle.deck1_id)
            .is_some_and(|row| row.contains_key(&battle.deck2_id))
            && matrix
                .get(&battle.deck2_id)
                .is_some_and(|row| row.contains_key(&battle.deck1_id));
        if !known || battle.has_malformed_score() {
            log::debug!("battle {}: not countable in matrix, skipped", battle.id);
            continue;
        }
        if let Some(cell) = matrix
            .get_mut(&battle.deck1_id)
            .and_then(|row| row.get_mut(&battle.deck2_id))
        {
            cell.wins = cell.wins.saturating_add(deck1_wins);
            cell.losses = cell.losses.saturating_add(deck2_wins);
        }
        if let Some(cell) = matrix
            .get_mut(&battle.deck2_id)
            .and_then(|row| row.get_mut(&battle.deck1_id))
        {
            cell.wins = cell.wins.saturating_add(deck2_wins);
            cell.losses = cell.losses.saturating_add(deck1_wins);
        }
    }

    for row in matrix.values_mut() {
        for cell in row.values_mut() {
            *cell = CompatibilityCell::from_counts(cell.wins, cell.losses);
        }
    }
    matrix
}

/// Cell for `deck` against `opponent`, if both are in the matrix.
pub fn cell<'a>(matrix: &'a CompatibilityMatrix, deck: &str, opponent: &str) -> Option<&'a CompatibilityCell> {
    matrix.get(deck).and_then(|row| row.get(opponent))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unplayed_pairs_have_zero_cells_and_no_self_cell() {
        let decks = vec![Deck::with_id("a", "A"), Deck::with_id("b", "B")];
        let matrix = build_matrix(&decks, &[]);
        assert_eq!(matrix["a"]["b"], CompatibilityCell::default());
        assert!(!matrix["a"].contains_key("a"));
    }

    #[test]
    fn orphan_battles_do_not_create_rows() {
        let decks = vec![Deck::with_id("a", "A")];
        let date: chrono::DateTime<chrono::Utc> = "2024-01-01T00:00:00Z".parse().unwrap();
        let battles = vec![Battle::new("a", "ghost", crate::Side::One, crate::Side::One, date)];
        let matrix = build_matrix(&decks, &battles);
        assert_eq!(matrix.len(), 1);
        assert!(matrix["a"].is_empty());
    }
}
