use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use kenolab_core::models::{validate_combination, Combination, Draw, GameFormat};
use kenolab_core::parse::{parse_draws, ParseSummary};

/// Lit et parse un fichier de tirages historiques.
pub fn read_draws(path: &Path, format: GameFormat) -> Result<(Vec<Draw>, ParseSummary)> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Impossible de lire {:?}", path))?;
    let (draws, summary) = parse_draws(&text, format)?;
    Ok((draws, summary))
}

/// Relit un fichier de combinaisons exporté (`id, n1 n2 ...` ou numéros seuls).
pub fn read_combinations(path: &Path, format: GameFormat) -> Result<Vec<Combination>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Impossible de lire {:?}", path))?;

    let mut combinations = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let combo = parse_combination_line(line, format)
            .with_context(|| format!("Ligne {} de {:?}", line_no + 1, path))?;
        combinations.push(combo);
    }

    if combinations.is_empty() {
        bail!("Aucune combinaison dans {:?}", path);
    }
    Ok(combinations)
}

fn parse_combination_line(line: &str, format: GameFormat) -> Result<Combination> {
    // la partie avant la première virgule est l'identifiant d'export
    let numbers_part = match line.split_once(',') {
        Some((_, rest)) => rest,
        None => line,
    };
    let numbers: Vec<u8> = numbers_part
        .split_whitespace()
        .map(|tok| {
            tok.parse::<u8>()
                .with_context(|| format!("'{}' n'est pas un entier", tok))
        })
        .collect::<Result<_>>()?;
    validate_combination(&numbers, format)?;
    Ok(Combination { numbers })
}
