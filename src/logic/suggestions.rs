//! Matchup suggestions: which pairs to play next.

use crate::models::{
    CompatibilityCell, CompatibilityMatrix, Deck, EngineConfig, Suggestion, SuggestionReason,
};
use rand::seq::SliceRandom;
use rand::Rng;

/// Top suggestions with the default scoring.
pub fn suggest_matchups(decks: &[Deck], matrix: &CompatibilityMatrix) -> Vec<Suggestion> {
    suggest_matchups_with(decks, matrix, &EngineConfig::default())
}

/// Score every unordered pair `(a, b)` (list order, `a` before `b`) from the `a → b` cell
/// and return the `suggestion_limit` highest priorities.
///
/// Tiers, with the default settings:
/// 1. never played: 1000
/// 2. fewer than 5 games: `500 + (5 - games) * 50`
/// 3. otherwise: `|win_rate - 50| * 10`
///
/// Equal priorities keep enumeration order.
pub fn suggest_matchups_with(
    decks: &[Deck],
    matrix: &CompatibilityMatrix,
    config: &EngineConfig,
) -> Vec<Suggestion> {
    let empty = CompatibilityCell::default();
    let mut scored = Vec::new();

    for (i, a) in decks.iter().enumerate() {
        for b in &decks[i + 1..] {
            let cell = matrix
                .get(&a.id)
                .and_then(|row| row.get(&b.id))
                .unwrap_or(&empty);
            if let Some(suggestion) = score_pair(a, b, cell, config) {
                scored.push(suggestion);
            }
        }
    }

    scored.sort_by(|x, y| y.priority.total_cmp(&x.priority));
    scored.truncate(config.suggestion_limit);
    scored
}

fn score_pair(a: &Deck, b: &Deck, cell: &CompatibilityCell, config: &EngineConfig) -> Option<Suggestion> {
    let (reason, priority, win_rate) = if cell.total_games == 0 {
        (SuggestionReason::Unplayed, config.unplayed_priority, None)
    } else if cell.total_games < config.few_games_threshold {
        let missing = (config.few_games_threshold - cell.total_games) as f64;
        (
            SuggestionReason::FewGames,
            config.few_games_base_priority + missing * config.few_games_step,
            Some(cell.win_rate),
        )
    } else {
        // Enough games but none decided: nothing to say about balance.
        if cell.wins.saturating_add(cell.losses) == 0 {
            return None;
        }
        (
            SuggestionReason::UnbalancedWinrate,
            (cell.win_rate - 50.0).abs() * config.imbalance_weight,
            Some(cell.win_rate),
        )
    };
    Some(Suggestion {
        deck1_id: a.id.clone(),
        deck2_id: b.id.clone(),
        reason,
        priority,
        win_rate,
    })
}

/// Pick one of the first `top_n` suggestions uniformly at random.
pub fn pick_suggestion<'a, R: Rng + ?Sized>(
    suggestions: &'a [Suggestion],
    top_n: usize,
    rng: &mut R,
) -> Option<&'a Suggestion> {
    let n = top_n.min(suggestions.len());
    suggestions[..n].choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::matrix::build_matrix;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn cell(wins: u32, losses: u32) -> CompatibilityCell {
        CompatibilityCell::from_counts(wins, losses)
    }

    #[test]
    fn few_games_priority_grows_as_games_shrink() {
        let a = Deck::with_id("a", "A");
        let b = Deck::with_id("b", "B");
        let config = EngineConfig::default();
        let one = score_pair(&a, &b, &cell(1, 0), &config).unwrap();
        let four = score_pair(&a, &b, &cell(2, 2), &config).unwrap();
        assert_eq!(one.reason, SuggestionReason::FewGames);
        assert_eq!(one.priority, 700.0);
        assert_eq!(four.priority, 550.0);
    }

    #[test]
    fn balanced_pair_scores_zero() {
        let a = Deck::with_id("a", "A");
        let b = Deck::with_id("b", "B");
        let s = score_pair(&a, &b, &cell(3, 3), &EngineConfig::default()).unwrap();
        assert_eq!(s.reason, SuggestionReason::UnbalancedWinrate);
        assert_eq!(s.priority, 0.0);
        let s = score_pair(&a, &b, &cell(5, 0), &EngineConfig::default()).unwrap();
        assert_eq!(s.priority, 500.0);
        assert_eq!(s.win_rate, Some(100.0));
    }

    #[test]
    fn undecided_cell_past_threshold_is_skipped() {
        let a = Deck::with_id("a", "A");
        let b = Deck::with_id("b", "B");
        let undecided = CompatibilityCell {
            wins: 0,
            losses: 0,
            win_rate: 0.0,
            total_games: 6,
        };
        assert!(score_pair(&a, &b, &undecided, &EngineConfig::default()).is_none());
    }

    #[test]
    fn pick_stays_within_top_n() {
        let decks: Vec<Deck> = (0..5).map(|i| Deck::with_id(i.to_string(), format!("D{i}"))).collect();
        let suggestions = suggest_matchups(&decks, &build_matrix(&decks, &[]));
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pick = pick_suggestion(&suggestions, 2, &mut rng).unwrap();
            assert!(suggestions[..2].contains(pick));
        }
        assert!(pick_suggestion(&[], 3, &mut rng).is_none());
    }
}
