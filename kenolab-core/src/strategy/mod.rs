pub mod parity;
pub mod tiered;
pub mod wheel;

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::models::Combination;

/// Nombre maximal de tentatives pour produire une combinaison valide.
pub const MAX_ATTEMPTS: usize = 1000;

/// Tire `count` numéros distincts du pool, sans remise.
fn sample_distinct(pool: &[u8], count: usize, rng: &mut StdRng) -> Vec<u8> {
    pool.choose_multiple(rng, count).copied().collect()
}

/// Trie et déduplique les numéros assemblés depuis plusieurs pools.
/// `None` si la déduplication descend sous la taille cible.
fn finalize(mut numbers: Vec<u8>, size: usize) -> Option<Combination> {
    numbers.sort_unstable();
    numbers.dedup();
    if numbers.len() == size {
        Some(Combination { numbers })
    } else {
        None
    }
}
