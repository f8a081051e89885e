use rand::rngs::StdRng;

use super::{finalize, sample_distinct, MAX_ATTEMPTS};
use crate::error::KenoError;
use crate::models::{Combination, GameFormat};

struct Tiers<'a> {
    hot: &'a [u8],
    mid: &'a [u8],
    cold: &'a [u8],
    take: [usize; 3],
}

/// Tranches hot/mid/cold du pool classé et quotas de tirage par tranche.
/// Les bornes suivent le découpage historique : les tranches se recouvrent.
fn split_tiers(ranked: &[u8], format: GameFormat) -> Result<Tiers<'_>, KenoError> {
    let (hot_end, mid_start, mid_end, cold_len, take) = match format {
        GameFormat::Keno9 => (35, 1, 40, 9, [4, 4, 1]),
        GameFormat::Keno12 => (15, 15, 40, 15, [2, 1, 1]),
    };

    let hot = ranked.get(..hot_end).ok_or(KenoError::InsufficientPool {
        tier: "chaud",
        available: ranked.len(),
        requested: hot_end,
    })?;
    let mid = ranked
        .get(mid_start..mid_end)
        .ok_or(KenoError::InsufficientPool {
            tier: "moyen",
            available: ranked.len(),
            requested: mid_end,
        })?;
    if ranked.len() < cold_len {
        return Err(KenoError::InsufficientPool {
            tier: "froid",
            available: ranked.len(),
            requested: cold_len,
        });
    }
    let cold = &ranked[ranked.len() - cold_len..];

    Ok(Tiers {
        hot,
        mid,
        cold,
        take,
    })
}

/// Stratégie hot/mid/cold : quotas fixes tirés de chaque tranche du pool
/// classé. Un doublon entre tranches invalide le tirage, qui est rejoué.
pub fn generate(
    ranked: &[u8],
    format: GameFormat,
    n: usize,
    rng: &mut StdRng,
) -> Result<Vec<Combination>, KenoError> {
    let tiers = split_tiers(ranked, format)?;
    let size = format.combo_size();

    let mut combinations = Vec::with_capacity(n);
    for _ in 0..n {
        let mut attempts = 0;
        let combo = loop {
            if attempts >= MAX_ATTEMPTS {
                return Err(KenoError::UnsatisfiableConstraint { attempts });
            }
            attempts += 1;

            let mut numbers = sample_distinct(tiers.hot, tiers.take[0], rng);
            numbers.extend(sample_distinct(tiers.mid, tiers.take[1], rng));
            numbers.extend(sample_distinct(tiers.cold, tiers.take[2], rng));
            if let Some(combo) = finalize(numbers, size) {
                break combo;
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

    fn ranked_66() -> Vec<u8> {
        (1..=66).collect()
    }

    #[test]
    fn test_generate_keno9() {
        let ranked = ranked_66();
        let mut rng = StdRng::seed_from_u64(42);
        let combos = generate(&ranked, GameFormat::Keno9, 5, &mut rng).unwrap();
        assert_eq!(combos.len(), 5);
        for combo in &combos {
            assert_eq!(combo.numbers.len(), 9);
            assert!(combo.numbers.windows(2).all(|w| w[0] < w[1]));
            assert!(combo.numbers.iter().all(|&n| (1..=66).contains(&n)));
        }
    }

    #[test]
    fn test_generate_keno12() {
        let ranked = ranked_66();
        let mut rng = StdRng::seed_from_u64(42);
        let combos = generate(&ranked, GameFormat::Keno12, 10, &mut rng).unwrap();
        assert_eq!(combos.len(), 10);
        for combo in &combos {
            assert_eq!(combo.numbers.len(), 4);
            assert!(combo.numbers.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_deterministic_with_seed() {
        let ranked = ranked_66();
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        let a = generate(&ranked, GameFormat::Keno9, 20, &mut rng_a).unwrap();
        let b = generate(&ranked, GameFormat::Keno9, 20, &mut rng_b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_insufficient_pool() {
        let ranked: Vec<u8> = (1..=20).collect();
        let mut rng = StdRng::seed_from_u64(1);
        let err = generate(&ranked, GameFormat::Keno9, 1, &mut rng).unwrap_err();
        assert!(matches!(err, KenoError::InsufficientPool { .. }));
    }

    #[test]
    fn test_cold_tier_is_sampled() {
        // avec un pool classé 1..66, la tranche froide est 58..=66
        let ranked = ranked_66();
        let mut rng = StdRng::seed_from_u64(9);
        let combos = generate(&ranked, GameFormat::Keno9, 30, &mut rng).unwrap();
        for combo in &combos {
            assert!(combo.numbers.iter().any(|&n| n >= 58));
        }
    }
}
