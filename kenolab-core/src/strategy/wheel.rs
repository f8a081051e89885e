use rand::rngs::StdRng;

use super::sample_distinct;
use crate::error::KenoError;
use crate::models::{Combination, GameFormat};

/// Numéros du domaine absents du noyau.
fn complement(core: &[u8], format: GameFormat) -> Vec<u8> {
    (1..=format.domain_max())
        .filter(|n| !core.contains(n))
        .collect()
}

/// Complète un noyau avec des numéros tirés du pool complémentaire.
/// Noyau et pool sont disjoints : la taille cible est garantie.
fn fill_from(core: &[u8], pool: &[u8], size: usize, rng: &mut StdRng) -> Combination {
    let mut numbers = core.to_vec();
    numbers.extend(sample_distinct(pool, size - core.len(), rng));
    numbers.sort_unstable();
    Combination { numbers }
}

/// Stratégie wheel : un noyau fixe (tête du classement) présent dans chaque
/// combinaison, le reste tiré au hasard dans le complément du domaine.
pub fn generate(
    ranked: &[u8],
    format: GameFormat,
    n: usize,
    rng: &mut StdRng,
) -> Result<Vec<Combination>, KenoError> {
    let core_size = format.core_size();
    let core = ranked.get(..core_size).ok_or(KenoError::InsufficientPool {
        tier: "noyau",
        available: ranked.len(),
        requested: core_size,
    })?;
    generate_from_cores(&[core.to_vec()], format, n, rng)
}

/// Variante multi-noyaux : plusieurs noyaux servis en alternance pour élargir
/// la couverture (tête du classement, suivants, tirage dans la queue, tirage
/// global).
pub fn generate_multi(
    ranked: &[u8],
    format: GameFormat,
    n: usize,
    rng: &mut StdRng,
) -> Result<Vec<Combination>, KenoError> {
    let c = format.core_size();
    if ranked.len() < 4 * c {
        return Err(KenoError::InsufficientPool {
            tier: "noyaux",
            available: ranked.len(),
            requested: 4 * c,
        });
    }

    let domain: Vec<u8> = (1..=format.domain_max()).collect();
    let tail = &ranked[ranked.len() - 2 * c..];
    let cores = vec![
        ranked[..c].to_vec(),
        ranked[c..2 * c].to_vec(),
        sample_distinct(tail, c, rng),
        sample_distinct(&domain, c, rng),
    ];
    generate_from_cores(&cores, format, n, rng)
}

fn generate_from_cores(
    cores: &[Vec<u8>],
    format: GameFormat,
    n: usize,
    rng: &mut StdRng,
) -> Result<Vec<Combination>, KenoError> {
    let size = format.combo_size();
    let pools: Vec<Vec<u8>> = cores.iter().map(|core| complement(core, format)).collect();
    for (core, pool) in cores.iter().zip(&pools) {
        let fill = size - core.len();
        if pool.len() < fill {
            return Err(KenoError::InsufficientPool {
                tier: "complément",
                available: pool.len(),
                requested: fill,
            });
        }
    }

    let mut combinations = Vec::with_capacity(n);
    for i in 0..n {
        let which = i % cores.len();
        combinations.push(fill_from(&cores[which], &pools[which], size, rng));
    }
    Ok(combinations)
}
