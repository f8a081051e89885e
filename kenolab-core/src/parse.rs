use log::warn;

use crate::error::KenoError;
use crate::models::{validate_draw, Draw, GameFormat};

/// Bilan d'un import de tirages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseSummary {
    pub total_lines: u32,
    pub parsed: u32,
    pub skipped: u32,
}

/// Découpe un texte en tirages, une ligne par tirage, séparateurs virgule
/// et/ou espaces. Les lignes invalides sont ignorées et comptées dans le
/// bilan ; aucune ligne valide vaut `EmptyInput`.
pub fn parse_draws(text: &str, format: GameFormat) -> Result<(Vec<Draw>, ParseSummary), KenoError> {
    let mut summary = ParseSummary::default();
    let mut draws = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        summary.total_lines += 1;
        match parse_line(line, format) {
            Ok(draw) => {
                draws.push(draw);
                summary.parsed += 1;
            }
            Err(e) => {
                warn!("Ligne {} ignorée : {}", line_no + 1, e);
                summary.skipped += 1;
            }
        }
    }

    if draws.is_empty() {
        return Err(KenoError::EmptyInput);
    }
    Ok((draws, summary))
}

fn parse_line(line: &str, format: GameFormat) -> Result<Draw, KenoError> {
    let normalized = line.replace(',', " ");
    let numbers: Vec<u8> = normalized
        .split_whitespace()
        .map(|tok| {
            tok.parse::<u8>()
                .map_err(|_| KenoError::MalformedInput(format!("'{}' n'est pas un entier", tok)))
        })
        .collect::<Result<_, _>>()?;
    validate_draw(&numbers, format)?;
    Ok(Draw { numbers })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        let (draws, summary) =
            parse_draws("1, 2, 3, 4, 5, 6, 7, 8, 9\n", GameFormat::Keno9).unwrap();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].numbers, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(summary.parsed, 1);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn test_parse_whitespace_separated() {
        let (draws, _) = parse_draws("10 20 30 40 50 60 61 62 63", GameFormat::Keno9).unwrap();
        assert_eq!(draws[0].numbers, vec![10, 20, 30, 40, 50, 60, 61, 62, 63]);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let text = "1, 2, 3, 4, 5, 6, 7, 8, 9\nabc def\n1 2 3\n2, 3, 4, 5, 6, 7, 8, 9, 10\n";
        let (draws, summary) = parse_draws(text, GameFormat::Keno9).unwrap();
        assert_eq!(draws.len(), 2);
        assert_eq!(summary.total_lines, 4);
        assert_eq!(summary.parsed, 2);
        assert_eq!(summary.skipped, 2);
    }

    #[test]
    fn test_parse_skips_out_of_range() {
        let text = "1 2 3 4 5 6 7 8 99\n1 2 3 4 5 6 7 8 9\n";
        let (draws, summary) = parse_draws(text, GameFormat::Keno9).unwrap();
        assert_eq!(draws.len(), 1);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_parse_keno12_requires_twelve_numbers() {
        let text = "1 2 3 4 5 6 7 8 9\n1 2 3 4 5 6 7 8 9 10 11 12\n";
        let (draws, _) = parse_draws(text, GameFormat::Keno12).unwrap();
        assert_eq!(draws.len(), 1);
        assert_eq!(draws[0].numbers.len(), 12);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(
            parse_draws("", GameFormat::Keno9),
            Err(KenoError::EmptyInput)
        );
        assert_eq!(
            parse_draws("abc\n\n", GameFormat::Keno9),
            Err(KenoError::EmptyInput)
        );
    }

    #[test]
    fn test_parse_blank_lines_not_counted() {
        let text = "\n1 2 3 4 5 6 7 8 9\n\n";
        let (_, summary) = parse_draws(text, GameFormat::Keno9).unwrap();
        assert_eq!(summary.total_lines, 1);
    }
}
