//! Common types: shot outcomes and board errors.

use core::fmt;

/// Outcome of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot hit open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot struck the last intact segment of a ship.
    Sunk,
}

impl ShotOutcome {
    /// A hit of either kind grants the shooter another move.
    pub fn repeats_turn(self) -> bool {
        !matches!(self, ShotOutcome::Miss)
    }
}

/// Errors returned by Board operations. All are recoverable: the move
/// loop re-prompts on the first two, the placement loop redraws on the
/// third.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Target coordinate lies outside the board.
    OutOfBounds,
    /// Target cell has already been fired at or is otherwise spent.
    AlreadyShot,
    /// Ship placement left the board or touched an existing ship.
    WrongPlacement,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "That coordinate is outside the board!"),
            BoardError::AlreadyShot => write!(f, "That cell has already been fired at"),
            BoardError::WrongPlacement => {
                write!(f, "Ship placement is out of bounds or touches another ship")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_misses_pass_the_turn() {
        assert!(!ShotOutcome::Miss.repeats_turn());
        assert!(ShotOutcome::Hit.repeats_turn());
        assert!(ShotOutcome::Sunk.repeats_turn());
    }
}
