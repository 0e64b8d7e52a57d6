//! Uniform-random computer player.

use std::thread;
use std::time::Duration;

use rand::rngs::SmallRng;
use rand::Rng;

use crate::config::COMPUTER_THINK_DELAY;
use crate::coord::Coord;

use super::Player;

/// Computer opponent that samples both axes independently and uniformly
/// over the board. The think pause is purely cosmetic.
pub struct RandomPlayer {
    think_delay: Duration,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            think_delay: COMPUTER_THINK_DELAY,
        }
    }

    /// A silent player with no think pause, for headless simulations and
    /// tests.
    pub fn instant() -> Self {
        Self {
            think_delay: Duration::ZERO,
        }
    }
}

impl Player for RandomPlayer {
    fn name(&self) -> &'static str {
        "Computer"
    }

    fn ask(&mut self, rng: &mut SmallRng, size: usize) -> Coord {
        let target = Coord::new(
            rng.random_range(0..size as i32),
            rng.random_range(0..size as i32),
        );
        if !self.think_delay.is_zero() {
            println!("The computer is thinking...");
            thread::sleep(self.think_delay);
            println!("Computer's move: {target}");
        }
        target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn targets_stay_on_the_board() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut player = RandomPlayer::instant();
        for _ in 0..500 {
            let c = player.ask(&mut rng, 6);
            assert!((0..6).contains(&c.row));
            assert!((0..6).contains(&c.col));
        }
    }
}
