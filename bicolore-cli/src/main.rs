mod display;
mod import;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use bicolore_core::features::compute_features;
use bicolore_core::simulation::{estimate_probability, generate_ticket};
use bicolore_core::BicoloreError;

use crate::display::{display_features, display_simulation};
use crate::import::FileEncoding;

#[derive(Parser)]
#[command(
    name = "bicolore",
    about = "Analyse statistique et simulation Monte Carlo pour le loto 双色球"
)]
struct Cli {
    /// Chemin vers le fichier de tirages (table tabulée)
    #[arg(short, long, default_value = "data/history_data.csv")]
    file: PathBuf,

    /// Nombre d'essais de la simulation Monte Carlo
    #[arg(short = 'n', long, default_value = "1000000", value_parser = clap::value_parser!(u64).range(1..))]
    trials: u64,

    /// Encodage du fichier d'entrée
    #[arg(short, long, default_value = "gbk")]
    encoding: FileEncoding,

    /// Seed pour la reproductibilité
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let draws = match import::load_draws(&cli.file, cli.encoding) {
        Ok(draws) => draws,
        Err(BicoloreError::FileNotFound(path)) => {
            // Fichier absent : message non fatal, pas d'analyse ni de simulation
            println!("Impossible de trouver le fichier : {}", path.display());
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let report = compute_features(&draws)?;
    display_features(&draws, &report);

    let mut rng: StdRng = match cli.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    // La combinaison gagnante est tirée une fois et reste fixe pour la run
    let winning = generate_ticket(&mut rng);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}").unwrap(),
    );
    pb.set_message(format!("Simulation de {} tirages...", cli.trials));
    pb.enable_steady_tick(Duration::from_millis(100));

    let estimate = estimate_probability(cli.trials, &winning, &mut rng)?;
    pb.finish_and_clear();

    display_simulation(cli.trials, &winning, estimate);

    Ok(())
}
