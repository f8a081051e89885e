use crate::error::KenoError;
use crate::models::Combination;

/// Export texte : une ligne `id, numéros` par combinaison, id en base 1.
/// C'est aussi le format relu par la vérification.
pub fn to_text(combinations: &[Combination]) -> String {
    combinations
        .iter()
        .enumerate()
        .map(|(i, combo)| format!("{}, {}", i + 1, combo.joined()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Export CSV : en-tête N1..Nk, une ligne par combinaison.
pub fn to_csv(combinations: &[Combination], size: usize) -> Result<String, KenoError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let header: Vec<String> = (1..=size).map(|i| format!("N{}", i)).collect();
    writer
        .write_record(&header)
        .map_err(|e| KenoError::Export(e.to_string()))?;
    for combo in combinations {
        writer
            .write_record(combo.numbers.iter().map(|n| n.to_string()))
            .map_err(|e| KenoError::Export(e.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| KenoError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| KenoError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combos() -> Vec<Combination> {
        vec![
            Combination {
                numbers: vec![2, 13, 27, 41],
            },
            Combination {
                numbers: vec![5, 6, 7, 8],
            },
        ]
    }

    #[test]
    fn test_to_text_format() {
        let text = to_text(&combos());
        assert_eq!(text, "1, 2 13 27 41\n2, 5 6 7 8");
    }

    #[test]
    fn test_to_text_empty() {
        assert_eq!(to_text(&[]), "");
    }

    #[test]
    fn test_to_csv_format() {
        let csv = to_csv(&combos(), 4).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("N1,N2,N3,N4"));
        assert_eq!(lines.next(), Some("2,13,27,41"));
        assert_eq!(lines.next(), Some("5,6,7,8"));
        assert_eq!(lines.next(), None);
    }
}
