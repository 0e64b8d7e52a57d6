//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete
//! implementations:
//! - HumanPlayer: interactive console player
//! - RandomPlayer: computer opponent firing uniformly at random

use rand::rngs::SmallRng;

use crate::common::BoardError;
use crate::coord::Coord;

/// Interface implemented by the two player kinds.
///
/// A player only chooses targets. The board it defends and the board it
/// fires at are owned by the game layer, which also runs the move loop.
pub trait Player {
    /// Label shown in turn banners and announcements.
    fn name(&self) -> &'static str;

    /// Choose the next target on an opponent board with the given edge
    /// length. The coordinate may still be rejected by the board; the
    /// move loop will ask again.
    fn ask(&mut self, rng: &mut SmallRng, size: usize) -> Coord;

    /// Feedback when the chosen target was rejected by the board.
    fn reject(&self, err: &BoardError) {
        log::debug!("{} target rejected: {}", self.name(), err);
    }
}

pub mod human;
pub use human::HumanPlayer;

pub mod random;
pub use random::RandomPlayer;
