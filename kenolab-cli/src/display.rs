use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use kenolab_core::frequency::{NumberFrequency, Tier};
use kenolab_core::models::{Combination, MatchHit};
use kenolab_core::parse::ParseSummary;

pub fn display_parse_summary(summary: &ParseSummary) {
    println!("Import terminé :");
    println!("  Lignes lues       : {}", summary.total_lines);
    println!("  Tirages retenus   : {}", summary.parsed);
    if summary.skipped > 0 {
        println!("  Lignes ignorées   : {}", summary.skipped);
    }
}

pub fn display_stats(stats: &[NumberFrequency], draw_count: usize) {
    println!("\n📊 Fréquences sur {} tirages\n", draw_count);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence", "Tendance"]);

    let mut sorted = stats.to_vec();
    sorted.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));

    for stat in &sorted {
        let color = match stat.tier {
            Tier::Hot => Color::Green,
            Tier::Cold => Color::Red,
            Tier::Mid => Color::White,
        };
        table.add_row(vec![
            Cell::new(format!("{:2}", stat.number)),
            Cell::new(stat.count.to_string()),
            Cell::new(stat.tier.to_string()).fg(color),
        ]);
    }
    println!("{table}");
}

pub fn display_combinations(combinations: &[Combination], preview: usize) {
    println!("\n🎲 Aperçu des combinaisons\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Combinaison"]);

    for (i, combo) in combinations.iter().take(preview).enumerate() {
        table.add_row(vec![format!("{}", i + 1), combo.joined()]);
    }
    println!("{table}");

    if combinations.len() > preview {
        println!("… et {} autres.", combinations.len() - preview);
    }
}

pub fn display_match_report(hits: &[MatchHit], combinations: &[Combination], draw_count: usize) {
    if hits.is_empty() {
        println!(
            "\nAucune combinaison couverte par les {} tirages.",
            draw_count
        );
        return;
    }

    println!(
        "\n🎯 {} combinaison(s) couverte(s) sur {}\n",
        hits.len(),
        combinations.len()
    );

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Variante", "Tirage", "Combinaison"]);

    for hit in hits {
        table.add_row(vec![
            format!("{}", hit.combination + 1),
            format!("{}", hit.draw + 1),
            combinations[hit.combination].joined(),
        ]);
    }
    println!("{table}");
}
