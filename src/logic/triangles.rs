//! Rock-paper-scissors detection over the compatibility matrix.

use crate::logic::matrix::cell;
use crate::models::{CompatibilityMatrix, Deck, EngineConfig, Triangle};

/// Triangles with the default thresholds (2 games, 55%).
pub fn find_triangles(decks: &[Deck], matrix: &CompatibilityMatrix) -> Vec<Triangle> {
    find_triangles_with(decks, matrix, &EngineConfig::default())
}

/// Every triple `i < j < k` of `decks` (list order) whose legs `i → j`, `j → k` and
/// `k → i` each have at least `triangle_min_games` games and at least
/// `triangle_min_win_rate` percent.
///
/// Only that one rotation is tested: a cycle running `i → k → j → i` is not reported.
/// Results are sorted by mean leg win rate, highest first; ties keep enumeration order.
pub fn find_triangles_with(
    decks: &[Deck],
    matrix: &CompatibilityMatrix,
    config: &EngineConfig,
) -> Vec<Triangle> {
    let (min_games, min_win_rate) = (config.triangle_min_games, config.triangle_min_win_rate);
    let leg = |from: &Deck, to: &Deck| -> Option<f64> {
        let c = cell(matrix, &from.id, &to.id)?;
        (c.total_games >= min_games && c.win_rate >= min_win_rate).then_some(c.win_rate)
    };

    let mut found = Vec::new();
    let n = decks.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let (a, b, c) = (&decks[i], &decks[j], &decks[k]);
                let Some(ab) = leg(a, b) else { continue };
                let Some(bc) = leg(b, c) else { continue };
                let Some(ca) = leg(c, a) else { continue };
                found.push(Triangle {
                    decks: [a.id.clone(), b.id.clone(), c.id.clone()],
                    win_rates: [ab, bc, ca],
                });
            }
        }
    }

    found.sort_by(|x, y| y.average_win_rate().total_cmp(&x.average_win_rate()));
    log::debug!("found {} triangle(s) among {} decks", found.len(), n);
    found
}
