mod display;
mod import;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use kenolab_core::export::{to_csv, to_text};
use kenolab_core::frequency::{build_frequency_table, rank_pool, tag_tiers};
use kenolab_core::matcher::first_hit;
use kenolab_core::models::{Combination, Draw, GameFormat, MatchHit};
use kenolab_core::strategy::{parity, tiered, wheel};

use crate::display::{
    display_combinations, display_match_report, display_parse_summary, display_stats,
};

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Strategy {
    /// Équilibre pondéré chaud/moyen/froid
    #[default]
    Tiered,
    /// Noyau fixe + variations
    Wheel,
    /// Noyaux multiples en alternance
    MultiWheel,
    /// Aléatoire équilibré pair/impair
    Parity,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum Format {
    /// Keno 9/66 : combinaisons de 9 numéros
    #[default]
    Keno9,
    /// Variante 12/66 : combinaisons de 4 numéros
    Keno12,
}

impl From<Format> for GameFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Keno9 => GameFormat::Keno9,
            Format::Keno12 => GameFormat::Keno12,
        }
    }
}

#[derive(Parser)]
#[command(name = "kenolab", about = "Générateur de combinaisons Keno par stratégies")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Afficher les fréquences des numéros sur un historique
    Stats {
        /// Fichier texte des tirages (une ligne par tirage)
        #[arg(short, long)]
        file: PathBuf,

        /// Format de jeu
        #[arg(long, default_value = "keno9")]
        format: Format,
    },

    /// Générer des combinaisons candidates
    Generate {
        /// Fichier texte des tirages (une ligne par tirage)
        #[arg(short, long)]
        file: PathBuf,

        /// Format de jeu
        #[arg(long, default_value = "keno9")]
        format: Format,

        /// Stratégie de génération
        #[arg(short, long, default_value = "tiered")]
        strategy: Strategy,

        /// Nombre de combinaisons à générer
        #[arg(short, long, default_value = "100")]
        count: usize,

        /// Seed pour la reproductibilité
        #[arg(long)]
        seed: Option<u64>,

        /// Fichier texte de sortie (une ligne `id, numéros`)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fichier CSV de sortie (colonnes N1..Nk)
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Vérifier les combinaisons générées contre l'historique
        #[arg(long)]
        check: bool,

        /// Nombre de combinaisons affichées en aperçu
        #[arg(long, default_value = "10")]
        preview: usize,
    },

    /// Vérifier un fichier de combinaisons contre un historique
    Check {
        /// Fichier texte des tirages (une ligne par tirage)
        #[arg(short, long)]
        file: PathBuf,

        /// Fichier de combinaisons exporté par `generate`
        #[arg(short, long)]
        combinations: PathBuf,

        /// Format de jeu
        #[arg(long, default_value = "keno9")]
        format: Format,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Stats { file, format } => cmd_stats(&file, format.into()),
        Command::Generate {
            file,
            format,
            strategy,
            count,
            seed,
            output,
            csv,
            check,
            preview,
        } => cmd_generate(
            &file,
            format.into(),
            strategy,
            count,
            seed,
            output,
            csv,
            check,
            preview,
        ),
        Command::Check {
            file,
            combinations,
            format,
        } => cmd_check(&file, &combinations, format.into()),
    }
}

fn cmd_stats(file: &PathBuf, format: GameFormat) -> Result<()> {
    let (draws, summary) = import::read_draws(file, format)?;
    display_parse_summary(&summary);

    let mut table = build_frequency_table(&draws, format.domain_max());
    tag_tiers(&mut table);
    display_stats(&table, draws.len());
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_generate(
    file: &PathBuf,
    format: GameFormat,
    strategy: Strategy,
    count: usize,
    seed: Option<u64>,
    output: Option<PathBuf>,
    csv: Option<PathBuf>,
    check: bool,
    preview: usize,
) -> Result<()> {
    let (draws, summary) = import::read_draws(file, format)?;
    display_parse_summary(&summary);

    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let combinations = match strategy {
        Strategy::Parity => parity::generate(format, count, &mut rng)?,
        _ => {
            let table = build_frequency_table(&draws, format.domain_max());
            let ranked = rank_pool(&table);
            match strategy {
                Strategy::Tiered => tiered::generate(&ranked, format, count, &mut rng)?,
                Strategy::Wheel => wheel::generate(&ranked, format, count, &mut rng)?,
                Strategy::MultiWheel => wheel::generate_multi(&ranked, format, count, &mut rng)?,
                Strategy::Parity => unreachable!(),
            }
        }
    };

    println!("\n{} combinaisons générées.", combinations.len());
    display_combinations(&combinations, preview);

    if let Some(path) = output {
        fs::write(&path, to_text(&combinations) + "\n")
            .with_context(|| format!("Impossible d'écrire {:?}", path))?;
        println!("Export texte : {}", path.display());
    }
    if let Some(path) = csv {
        fs::write(&path, to_csv(&combinations, format.combo_size())?)
            .with_context(|| format!("Impossible d'écrire {:?}", path))?;
        println!("Export CSV : {}", path.display());
    }

    if check {
        run_check(&combinations, &draws);
    }
    Ok(())
}

fn cmd_check(file: &PathBuf, combinations: &PathBuf, format: GameFormat) -> Result<()> {
    let (draws, summary) = import::read_draws(file, format)?;
    display_parse_summary(&summary);

    let combinations = import::read_combinations(combinations, format)?;
    println!("{} combinaisons relues.", combinations.len());

    run_check(&combinations, &draws);
    Ok(())
}

/// Balaye l'historique pour chaque combinaison et affiche le rapport.
fn run_check(combinations: &[Combination], draws: &[Draw]) {
    let pb = ProgressBar::new(combinations.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=> "),
    );
    pb.set_message("vérification");

    let mut hits = Vec::new();
    for (i, combo) in combinations.iter().enumerate() {
        if let Some(draw) = first_hit(combo, draws) {
            hits.push(MatchHit {
                combination: i,
                draw,
            });
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    display_match_report(&hits, combinations, draws.len());
}
