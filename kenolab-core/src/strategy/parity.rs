use rand::rngs::StdRng;

use super::{finalize, sample_distinct, MAX_ATTEMPTS};
use crate::error::KenoError;
use crate::models::{Combination, GameFormat};

/// Bandes numériques et quotas de tirage. Les bandes du format 9/66 se
/// recouvrent volontairement (découpage historique 4 + 4 + 1).
fn bands(format: GameFormat) -> Vec<(Vec<u8>, usize)> {
    match format {
        GameFormat::Keno9 => vec![
            ((1u8..=32).collect(), 4),
            ((23u8..=65).collect(), 4),
            ((48u8..=62).collect(), 1),
        ],
        GameFormat::Keno12 => vec![((1u8..=66).collect(), 4)],
    }
}

/// Règle de parité : 4 ou 5 pairs sur 9, exactement 2 pairs sur 4.
fn parity_ok(numbers: &[u8], format: GameFormat) -> bool {
    let even = numbers.iter().filter(|n| *n % 2 == 0).count();
    match format {
        GameFormat::Keno9 => (4..=5).contains(&even),
        GameFormat::Keno12 => even == 2,
    }
}

/// Stratégie aléatoire équilibrée : tirage par bandes basses/moyennes/hautes,
/// rejeté tant que la parité cible n'est pas atteinte.
pub fn generate(
    format: GameFormat,
    n: usize,
    rng: &mut StdRng,
) -> Result<Vec<Combination>, KenoError> {
    generate_bounded(format, n, rng, MAX_ATTEMPTS)
}

fn generate_bounded(
    format: GameFormat,
    n: usize,
    rng: &mut StdRng,
    max_attempts: usize,
) -> Result<Vec<Combination>, KenoError> {
    let bands = bands(format);
    let size = format.combo_size();

    let mut combinations = Vec::with_capacity(n);
    while combinations.len() < n {
        let mut attempts = 0;
        let combo = loop {
            if attempts >= max_attempts {
                return Err(KenoError::UnsatisfiableConstraint { attempts });
            }
            attempts += 1;

            let mut numbers = Vec::with_capacity(size);
            for (band, take) in &bands {
                numbers.extend(sample_distinct(band, *take, rng));
            }
            let Some(candidate) = finalize(numbers, size) else {
                continue;
            };
            if parity_ok(&candidate.numbers, format) {
                break candidate;
            }
        };
        combinations.push(combo);
    }
    Ok(combinations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_keno9_parity_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let combos = generate(GameFormat::Keno9, 50, &mut rng).unwrap();
        assert_eq!(combos.len(), 50);
        for combo in &combos {
            assert_eq!(combo.numbers.len(), 9);
            assert!(combo.numbers.windows(2).all(|w| w[0] < w[1]));
            let even = combo.numbers.iter().filter(|n| *n % 2 == 0).count();
            assert!((4..=5).contains(&even), "{} pairs", even);
        }
    }

    #[test]
    fn test_keno9_band_structure() {
        let mut rng = StdRng::seed_from_u64(3);
        let combos = generate(GameFormat::Keno9, 20, &mut rng).unwrap();
        for combo in &combos {
            // au moins 4 numéros dans 1..=32 et au moins 1 dans 48..=62
            assert!(combo.numbers.iter().filter(|&&n| n <= 32).count() >= 4);
            assert!(combo.numbers.iter().any(|&n| (48..=62).contains(&n)));
            assert!(combo.numbers.iter().all(|&n| n <= 65));
        }
    }

    #[test]
    fn test_keno12_exactly_two_even() {
        let mut rng = StdRng::seed_from_u64(8);
        let combos = generate(GameFormat::Keno12, 50, &mut rng).unwrap();
        for combo in &combos {
            assert_eq!(combo.numbers.len(), 4);
            let even = combo.numbers.iter().filter(|n| *n % 2 == 0).count();
            assert_eq!(even, 2);
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let mut rng_a = StdRng::seed_from_u64(2024);
        let mut rng_b = StdRng::seed_from_u64(2024);
        let a = generate(GameFormat::Keno9, 30, &mut rng_a).unwrap();
        let b = generate(GameFormat::Keno9, 30, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_retry_bound_surfaces_error() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate_bounded(GameFormat::Keno9, 1, &mut rng, 0).unwrap_err();
        assert_eq!(err, KenoError::UnsatisfiableConstraint { attempts: 0 });
    }
}
