use core::time::Duration;

/// Number of ships in one fleet; a board whose sunk count reaches this
/// has been beaten.
pub const NUM_SHIPS: usize = 7;

/// Lengths of the ships making up one fleet.
pub const FLEET: [usize; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Default edge length of a board.
pub const DEFAULT_BOARD_SIZE: usize = 6;

/// Random draws allowed for a single ship before the board is discarded.
pub const SHIP_PLACEMENT_ATTEMPTS: usize = 3000;

/// Whole-board generation attempts before giving up.
pub const BOARD_GENERATION_ATTEMPTS: usize = 300;

/// Cosmetic pause before the computer announces its move.
pub const COMPUTER_THINK_DELAY: Duration = Duration::from_secs(2);
