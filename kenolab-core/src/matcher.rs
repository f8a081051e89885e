use crate::models::{Combination, Draw, MatchHit};

/// Index du premier tirage historique couvrant entièrement la combinaison.
pub fn first_hit(combination: &Combination, draws: &[Draw]) -> Option<usize> {
    draws.iter().position(|draw| combination.is_covered_by(draw))
}

/// Détail des combinaisons couvertes ; celles sans couverture sont omises.
pub fn find_hits(combinations: &[Combination], draws: &[Draw]) -> Vec<MatchHit> {
    combinations
        .iter()
        .enumerate()
        .filter_map(|(i, combo)| {
            first_hit(combo, draws).map(|draw| MatchHit {
                combination: i,
                draw,
            })
        })
        .collect()
}

/// Nombre de combinaisons couvertes par au moins un tirage.
pub fn count_hits(combinations: &[Combination], draws: &[Draw]) -> usize {
    combinations
        .iter()
        .filter(|combo| first_hit(combo, draws).is_some())
        .count()
}
