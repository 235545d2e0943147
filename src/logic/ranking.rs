//! Deck ranking by aggregate win rate.

use crate::logic::matrix::build_matrix;
use crate::models::{win_rate_percent, Battle, Deck, RankedDeck, RankingMode};

/// Rank every deck by win rate, highest first. Equal rates fall back to name order.
///
/// `Plain` pools every game the deck played. `Normalized` averages the deck's win rate
/// against each opponent it has played, so a heavily played pairing counts once.
/// Decks without games rank with a win rate of 0.
pub fn rank_decks(decks: &[Deck], battles: &[Battle], mode: RankingMode) -> Vec<RankedDeck> {
    let matrix = build_matrix(decks, battles);

    let mut ranked: Vec<RankedDeck> = decks
        .iter()
        .map(|deck| {
            let played: Vec<_> = matrix
                .get(&deck.id)
                .into_iter()
                .flat_map(|row| row.values())
                .filter(|c| c.total_games > 0)
                .collect();
            let wins = played.iter().fold(0u32, |acc, c| acc.saturating_add(c.wins));
            let losses = played.iter().fold(0u32, |acc, c| acc.saturating_add(c.losses));
            let win_rate = match mode {
                RankingMode::Plain => win_rate_percent(wins, losses),
                RankingMode::Normalized if played.is_empty() => 0.0,
                RankingMode::Normalized => {
                    played.iter().map(|c| c.win_rate).sum::<f64>() / played.len() as f64
                }
            };
            RankedDeck {
                deck_id: deck.id.clone(),
                name: deck.name.clone(),
                wins,
                losses,
                total_games: wins.saturating_add(losses),
                opponents: played.len() as u32,
                win_rate,
            }
        })
        .collect();

    ranked.sort_by(|a, b| b.win_rate.total_cmp(&a.win_rate).then_with(|| a.name.cmp(&b.name)));
    ranked
}
