//! Board generation, the move loop and the turn controller.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_GENERATION_ATTEMPTS, FLEET, SHIP_PLACEMENT_ATTEMPTS};
use crate::coord::Coord;
use crate::player::{HumanPlayer, Player, RandomPlayer};
use crate::ship::{Orientation, Ship};

/// Draw one random ship of the given length. Origins are sampled over the
/// whole grid without clamping; placements that do not fit are rejected
/// by the board and simply redrawn.
fn random_ship(rng: &mut SmallRng, size: usize, length: usize) -> Ship {
    let origin = Coord::new(
        rng.random_range(0..size as i32),
        rng.random_range(0..size as i32),
    );
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Ship::new(origin, length, orientation)
}

/// Place the whole fleet on a fresh board, retrying each ship up to
/// `SHIP_PLACEMENT_ATTEMPTS` times before declaring the board failed.
fn try_place_fleet(rng: &mut SmallRng, size: usize) -> Result<Board, BoardError> {
    let mut board = Board::new(size);
    for &length in &FLEET {
        let mut placed = false;
        for _ in 0..SHIP_PLACEMENT_ATTEMPTS {
            if board.add_ship(random_ship(rng, size, length)).is_ok() {
                placed = true;
                break;
            }
        }
        if !placed {
            return Err(BoardError::WrongPlacement);
        }
    }
    Ok(board)
}

/// Generate a playable board carrying the standard fleet, regenerating
/// from scratch up to `BOARD_GENERATION_ATTEMPTS` times.
pub fn generate_board(rng: &mut SmallRng, size: usize) -> Result<Board, BoardError> {
    for attempt in 0..BOARD_GENERATION_ATTEMPTS {
        match try_place_fleet(rng, size) {
            Ok(mut board) => {
                log::debug!("fleet placed on board attempt {}", attempt + 1);
                board.begin();
                return Ok(board);
            }
            Err(_) => {
                log::warn!("fleet placement exhausted its budget, regenerating board");
            }
        }
    }
    Err(BoardError::WrongPlacement)
}

/// One complete move: ask the player for targets until a shot resolves,
/// then report the outcome. Rejected targets are fed back to the player
/// and re-asked without consuming the turn.
pub fn take_turn(player: &mut dyn Player, enemy: &mut Board, rng: &mut SmallRng) -> ShotOutcome {
    loop {
        let target = player.ask(rng, enemy.size());
        match enemy.shot(target) {
            Ok(outcome) => return outcome,
            Err(err) => player.reject(&err),
        }
    }
}

/// Run a game between two players to completion and return the index of
/// the winner (0 for `first`, 1 for `second`).
///
/// Turn order is decided by the parity of a move counter: even means
/// `first` fires at `second_board`, odd the reverse. A hit decrements the
/// counter before the unconditional increment at the end of the loop, so
/// the same player moves again. `show_boards` switches all rendering off
/// for headless runs.
pub fn play(
    first: &mut dyn Player,
    first_board: &mut Board,
    second: &mut dyn Player,
    second_board: &mut Board,
    rng: &mut SmallRng,
    show_boards: bool,
) -> usize {
    let mut marker: i32 = 0;
    loop {
        if show_boards {
            println!("\n{}'s board:", first.name());
            print!("{first_board}");
            println!("\n{}'s board:", second.name());
            print!("{second_board}");
        }
        let outcome = if marker % 2 == 0 {
            if show_boards {
                println!("\n{} to move!", first.name());
            }
            take_turn(first, second_board, rng)
        } else {
            if show_boards {
                println!("\n{} to move!", second.name());
            }
            take_turn(second, first_board, rng)
        };
        if show_boards {
            match outcome {
                ShotOutcome::Miss => println!("Miss!"),
                ShotOutcome::Hit => println!("Hit!"),
                ShotOutcome::Sunk => println!("Sunk!"),
            }
        }
        if outcome.repeats_turn() {
            marker -= 1;
        }
        if second_board.all_sunk() {
            return 0;
        }
        if first_board.all_sunk() {
            return 1;
        }
        marker += 1;
    }
}

/// A full interactive game: human vs. computer on two generated boards.
pub struct Game {
    human: HumanPlayer,
    computer: RandomPlayer,
    human_board: Board,
    computer_board: Board,
    rng: SmallRng,
}

impl Game {
    /// Generate both boards and pair the players. The computer's board is
    /// hidden unless `reveal_computer` is set.
    pub fn new(mut rng: SmallRng, size: usize, reveal_computer: bool) -> Result<Self, BoardError> {
        println!("Generating boards...");
        let human_board = generate_board(&mut rng, size)?;
        let mut computer_board = generate_board(&mut rng, size)?;
        computer_board.set_reveal(reveal_computer);
        Ok(Self {
            human: HumanPlayer::new(),
            computer: RandomPlayer::new(),
            human_board,
            computer_board,
            rng,
        })
    }

    /// Run the game to completion and return the winner's name.
    pub fn run(&mut self) -> &'static str {
        println!("Welcome to Sea Battle!");
        let winner = play(
            &mut self.human,
            &mut self.human_board,
            &mut self.computer,
            &mut self.computer_board,
            &mut self.rng,
            true,
        );
        let (name, loser_board) = if winner == 0 {
            (self.human.name(), &self.computer_board)
        } else {
            (self.computer.name(), &self.human_board)
        };
        println!("{}", "-".repeat(25));
        println!("{name} wins!");
        print!("{loser_board}");
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::config::DEFAULT_BOARD_SIZE;
    use proptest::prelude::*;
    use rand::SeedableRng;

    /// Feeds a fixed list of targets; panics if asked for more.
    struct Scripted {
        shots: std::vec::IntoIter<Coord>,
    }

    impl Scripted {
        fn new(shots: Vec<Coord>) -> Self {
            Self {
                shots: shots.into_iter(),
            }
        }
    }

    impl Player for Scripted {
        fn name(&self) -> &'static str {
            "Scripted"
        }

        fn ask(&mut self, _rng: &mut SmallRng, _size: usize) -> Coord {
            self.shots.next().expect("script exhausted")
        }
    }

    fn board_with_one_ship(origin: Coord, length: usize) -> Board {
        let mut board = Board::new(6);
        board
            .add_ship(Ship::new(origin, length, Orientation::Horizontal))
            .unwrap();
        board.begin();
        board
    }

    fn chebyshev(a: Coord, b: Coord) -> i32 {
        (a.row - b.row).abs().max((a.col - b.col).abs())
    }

    #[test]
    fn rejected_targets_do_not_consume_the_turn() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut enemy = board_with_one_ship(Coord::new(2, 2), 1);
        assert_eq!(enemy.shot(Coord::new(0, 0)), Ok(ShotOutcome::Miss));
        // out of bounds, then a repeat of the earlier miss, then the kill
        let mut player = Scripted::new(vec![
            Coord::new(9, 9),
            Coord::new(0, 0),
            Coord::new(2, 2),
        ]);
        let outcome = take_turn(&mut player, &mut enemy, &mut rng);
        assert_eq!(outcome, ShotOutcome::Sunk);
        assert_eq!(enemy.shot_count(), 2);
    }

    #[test]
    fn a_hit_keeps_the_same_players_turn() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut first_board = board_with_one_ship(Coord::new(0, 0), 1);
        let mut second_board = board_with_one_ship(Coord::new(0, 0), 2);
        // hits twice in a row, sinking the length-2 ship without ever
        // yielding the turn; the second player's empty script would panic
        // if it were asked
        let mut first = Scripted::new(vec![Coord::new(0, 0), Coord::new(0, 1)]);
        let mut second = Scripted::new(vec![]);
        let winner = play(
            &mut first,
            &mut first_board,
            &mut second,
            &mut second_board,
            &mut rng,
            false,
        );
        assert_eq!(winner, 0);
    }

    #[test]
    fn a_miss_passes_the_turn() {
        let mut rng = SmallRng::seed_from_u64(0);
        let mut first_board = board_with_one_ship(Coord::new(0, 0), 1);
        let mut second_board = board_with_one_ship(Coord::new(0, 0), 1);
        // first misses, second sinks the lone ship and wins
        let mut first = Scripted::new(vec![Coord::new(5, 5)]);
        let mut second = Scripted::new(vec![Coord::new(0, 0)]);
        let winner = play(
            &mut first,
            &mut first_board,
            &mut second,
            &mut second_board,
            &mut rng,
            false,
        );
        assert_eq!(winner, 1);
        assert!(first_board.all_sunk());
        assert!(!second_board.all_sunk());
    }

    #[test]
    fn generated_board_carries_the_standard_fleet() {
        let mut rng = SmallRng::seed_from_u64(42);
        let board = generate_board(&mut rng, DEFAULT_BOARD_SIZE).unwrap();
        assert_eq!(board.ships().len(), FLEET.len());
        let mut lengths: Vec<usize> = board.ships().iter().map(|s| s.length()).collect();
        lengths.sort_unstable();
        let mut expected = FLEET.to_vec();
        expected.sort_unstable();
        assert_eq!(lengths, expected);
        // placement bookkeeping cleared for the shooting phase
        for row in 0..DEFAULT_BOARD_SIZE as i32 {
            for col in 0..DEFAULT_BOARD_SIZE as i32 {
                assert!(!board.is_taken(Coord::new(row, col)));
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn generated_fleets_never_touch(seed in any::<u64>()) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let board = generate_board(&mut rng, DEFAULT_BOARD_SIZE).unwrap();

            let occupied: usize = board.ships().iter().map(|s| s.length()).sum();
            prop_assert_eq!(occupied, 11);

            let ship_cells: usize = (0..DEFAULT_BOARD_SIZE as i32)
                .flat_map(|r| (0..DEFAULT_BOARD_SIZE as i32).map(move |c| Coord::new(r, c)))
                .filter(|&c| board.cell(c) == Some(Cell::Ship))
                .count();
            prop_assert_eq!(ship_cells, 11);

            let dots: Vec<Vec<Coord>> = board.ships().iter().map(|s| s.dots()).collect();
            for (i, a) in dots.iter().enumerate() {
                for b in dots.iter().skip(i + 1) {
                    for &da in a {
                        for &db in b {
                            prop_assert!(chebyshev(da, db) > 1);
                        }
                    }
                }
            }
        }
    }
}
