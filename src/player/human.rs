//! Interactive console player.

use std::io::{self, Write};

use rand::rngs::SmallRng;

use crate::common::BoardError;
use crate::coord::Coord;

use super::Player;

/// Player driven by stdin. Coordinates are entered 1-indexed, row first.
pub struct HumanPlayer;

impl HumanPlayer {
    pub fn new() -> Self {
        Self
    }
}

/// Prompt until the line parses as an integer. Range checking is the
/// board's job; only non-numeric input is retried here.
fn read_number(prompt: &str) -> i32 {
    loop {
        print!("{prompt}");
        io::stdout().flush().unwrap();
        let mut line = String::new();
        io::stdin().read_line(&mut line).unwrap();
        match line.trim().parse() {
            Ok(n) => return n,
            Err(_) => println!("Enter a number!"),
        }
    }
}

impl Player for HumanPlayer {
    fn name(&self) -> &'static str {
        "Player"
    }

    fn ask(&mut self, _rng: &mut SmallRng, _size: usize) -> Coord {
        let row = read_number("Row: ");
        let col = read_number("Column: ");
        // The console speaks 1-indexed, the board zero-indexed.
        Coord::new(row - 1, col - 1)
    }

    fn reject(&self, err: &BoardError) {
        println!("{err}");
    }
}
