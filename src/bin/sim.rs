use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

use seabattle::{generate_board, init_logging, play, RandomPlayer, DEFAULT_BOARD_SIZE};

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut board1 = generate_board(&mut rng1, DEFAULT_BOARD_SIZE).map_err(|e| anyhow::anyhow!(e))?;
    let mut board2 = generate_board(&mut rng2, DEFAULT_BOARD_SIZE).map_err(|e| anyhow::anyhow!(e))?;

    let mut p1 = RandomPlayer::instant();
    let mut p2 = RandomPlayer::instant();

    let winner = play(&mut p1, &mut board1, &mut p2, &mut board2, &mut rng1, false);

    let result = json!({
        "player1": {"seed": seed1, "shots_taken": board2.shot_count(), "ships_sunk": board2.sunk_count()},
        "player2": {"seed": seed2, "shots_taken": board1.shot_count(), "ships_sunk": board1.sunk_count()},
        "winner": if winner == 0 { "player1" } else { "player2" },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
