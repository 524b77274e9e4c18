use std::path::PathBuf;

use anyhow::Context;
use chess_openings::example_opening;
use clap::Parser;
use opening_trainer::{PieceStyle, Session, Trainer, TrainerConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "opening-trainer")]
#[command(about = "Drill chess opening lines against a weighted repertoire")]
struct Cli {
    /// Opening tree JSON file (defaults to the built-in example)
    #[arg(short, long)]
    opening: Option<PathBuf>,

    /// Path to the configuration file
    #[arg(short, long, default_value_os_t = TrainerConfig::config_path())]
    config: PathBuf,

    /// Write the built-in example opening to this file before training
    #[arg(long)]
    save_example: Option<PathBuf>,

    /// Seed for the computer's move choice
    #[arg(long)]
    seed: Option<u64>,

    /// Draw the board with letters instead of chess glyphs
    #[arg(long)]
    ascii: bool,
}

impl Cli {
    /// Command-line flags take precedence over the configuration file.
    fn merge_into(self, mut config: TrainerConfig) -> TrainerConfig {
        if self.opening.is_some() {
            config.opening = self.opening;
        }
        if self.save_example.is_some() {
            config.save_example = self.save_example;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.ascii {
            config.unicode = false;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = TrainerConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    let config = cli.merge_into(config);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(path) = &config.save_example {
        example_opening()
            .save_to_file(path)
            .with_context(|| format!("saving example opening to {}", path.display()))?;
        println!("Example opening saved to {}", path.display());
    }

    let tree = config.opening_tree().context("loading opening tree")?;
    tracing::info!(positions = tree.len(), player = %tree.start, "starting training session");

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut trainer = Trainer::new(tree, rng);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(
        &mut trainer,
        stdin.lock(),
        stdout.lock(),
        PieceStyle::from_unicode_flag(config.unicode),
    )
    .run()?;

    Ok(())
}
