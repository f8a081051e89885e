use crate::models::Draw;

/// Fréquence d'apparition d'un numéro sur l'historique chargé.
#[derive(Debug, Clone)]
pub struct NumberFrequency {
    pub number: u8,
    pub count: u32,
    pub tier: Tier,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Hot,
    Mid,
    Cold,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Hot => write!(f, "HOT"),
            Tier::Mid => write!(f, "-"),
            Tier::Cold => write!(f, "COLD"),
        }
    }
}

/// Compte les apparitions de chaque numéro du domaine (zéro par défaut).
pub fn build_frequency_table(draws: &[Draw], domain_max: u8) -> Vec<NumberFrequency> {
    let mut table: Vec<NumberFrequency> = (1..=domain_max)
        .map(|n| NumberFrequency {
            number: n,
            count: 0,
            tier: Tier::Mid,
        })
        .collect();

    for draw in draws {
        for &n in &draw.numbers {
            let idx = (n - 1) as usize;
            if idx < table.len() {
                table[idx].count += 1;
            }
        }
    }

    table
}

/// Étiquette chaud/froid par écart à la fréquence moyenne (seuil 30 %).
pub fn tag_tiers(table: &mut [NumberFrequency]) {
    let total: u32 = table.iter().map(|f| f.count).sum();
    if total == 0 || table.is_empty() {
        return;
    }
    let mean = total as f64 / table.len() as f64;
    let threshold = 0.3;

    for freq in table.iter_mut() {
        let deviation = (freq.count as f64 - mean) / mean;
        if deviation > threshold {
            freq.tier = Tier::Hot;
        } else if deviation < -threshold {
            freq.tier = Tier::Cold;
        } else {
            freq.tier = Tier::Mid;
        }
    }
}

/// Numéros du domaine classés par fréquence décroissante, égalités départagées
/// par numéro croissant pour garder un ordre reproductible.
pub fn rank_pool(table: &[NumberFrequency]) -> Vec<u8> {
    let mut ranked: Vec<(u8, u32)> = table.iter().map(|f| (f.number, f.count)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ranked.into_iter().map(|(n, _)| n).collect()
}
