use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{init_logging, Game, DEFAULT_BOARD_SIZE, FLEET};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge length of both boards.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Fix RNG seed for reproducible games (e.g., --seed 12345).
    #[arg(long)]
    seed: Option<u64>,

    /// Reveal the computer's ships (debugging aid).
    #[arg(long)]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let longest = FLEET.iter().copied().max().unwrap_or(1);
    anyhow::ensure!(
        cli.size >= longest,
        "board size {} cannot fit the longest ship (length {})",
        cli.size,
        longest
    );

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(rng, cli.size, cli.reveal).map_err(|e| anyhow::anyhow!(e))?;
    game.run();
    Ok(())
}
