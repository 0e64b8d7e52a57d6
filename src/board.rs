//! Board state: ship placement, the no-touching exclusion ring and shot
//! resolution.

use std::collections::HashSet;
use std::fmt;

use crate::common::{BoardError, ShotOutcome};
use crate::coord::Coord;
use crate::ship::Ship;

/// Display state of a single grid cell. Presentation only; whether a cell
/// can still be fired at is tracked separately in the board's taken set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Revealed part of the miss ring around a sunk ship.
    Excluded,
}

/// The 3x3 neighborhood around a cell, the cell itself included.
const NEIGHBORHOOD: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// One player's board: the grid, the placed fleet and the set of cells no
/// longer available as targets.
pub struct Board {
    size: usize,
    grid: Vec<Cell>,
    ships: Vec<Ship>,
    /// Cells unavailable for future shots: already fired at, occupied by
    /// a ship, or reserved by the placement adjacency ring. `begin`
    /// clears it so that during play it holds genuine shots only.
    taken: HashSet<Coord>,
    sunk: usize,
    reveal_ships: bool,
}

impl Board {
    /// Create an empty board. Ships are visible when rendered until
    /// `set_reveal(false)`.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            grid: vec![Cell::Empty; size * size],
            ships: Vec::new(),
            taken: HashSet::new(),
            sunk: 0,
            reveal_ships: true,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// The placed fleet.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of resolved shots taken against this board.
    pub fn shot_count(&self) -> usize {
        self.grid
            .iter()
            .filter(|c| matches!(c, Cell::Hit | Cell::Miss))
            .count()
    }

    /// Whether ships are drawn when the board is rendered.
    pub fn set_reveal(&mut self, reveal: bool) {
        self.reveal_ships = reveal;
    }

    /// True iff either axis of `c` falls outside `[0, size)`.
    pub fn is_out(&self, c: Coord) -> bool {
        c.row < 0 || c.col < 0 || c.row >= self.size as i32 || c.col >= self.size as i32
    }

    /// Cell display state, or `None` outside the board.
    pub fn cell(&self, c: Coord) -> Option<Cell> {
        if self.is_out(c) {
            None
        } else {
            Some(self.grid[self.index(c)])
        }
    }

    /// Whether `c` is spent as a future target.
    pub fn is_taken(&self, c: Coord) -> bool {
        self.taken.contains(&c)
    }

    fn index(&self, c: Coord) -> usize {
        c.row as usize * self.size + c.col as usize
    }

    fn set_cell(&mut self, c: Coord, cell: Cell) {
        let idx = self.index(c);
        self.grid[idx] = cell;
    }

    /// Reserve the cells around every dot of a ship so nothing else can
    /// land there, optionally revealing the ring on the grid. Cells
    /// already taken keep their current glyph.
    fn exclude_around(&mut self, dots: &[Coord], mark_on_grid: bool) {
        for &dot in dots {
            for &(dr, dc) in &NEIGHBORHOOD {
                let c = dot.offset(dr, dc);
                if self.is_out(c) || !self.taken.insert(c) {
                    continue;
                }
                if mark_on_grid {
                    self.set_cell(c, Cell::Excluded);
                }
            }
        }
    }

    /// Place a ship. A single attempt: any dot out of bounds or on a
    /// spent cell rejects the whole placement, and the caller draws a new
    /// ship. On success the adjacency ring is reserved without being
    /// shown.
    pub fn add_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        let dots = ship.dots();
        if dots.iter().any(|&d| self.is_out(d) || self.taken.contains(&d)) {
            return Err(BoardError::WrongPlacement);
        }
        for &d in &dots {
            self.set_cell(d, Cell::Ship);
            self.taken.insert(d);
        }
        self.ships.push(ship);
        self.exclude_around(&dots, false);
        Ok(())
    }

    /// Enter the shooting phase: placement bookkeeping is discarded so
    /// the taken set tracks genuine shots only. Grid and ships are
    /// untouched.
    pub fn begin(&mut self) {
        self.taken.clear();
    }

    /// Resolve a shot at `c`.
    pub fn shot(&mut self, c: Coord) -> Result<ShotOutcome, BoardError> {
        if self.is_out(c) {
            return Err(BoardError::OutOfBounds);
        }
        if self.taken.contains(&c) {
            return Err(BoardError::AlreadyShot);
        }
        // The cell is burned even when the shot misses.
        self.taken.insert(c);

        if let Some(i) = self.ships.iter().position(|s| s.covers(c)) {
            self.ships[i].register_hit();
            self.set_cell(c, Cell::Hit);
            if self.ships[i].is_sunk() {
                self.sunk += 1;
                let dots = self.ships[i].dots();
                self.exclude_around(&dots, true);
                return Ok(ShotOutcome::Sunk);
            }
            return Ok(ShotOutcome::Hit);
        }

        self.set_cell(c, Cell::Miss);
        Ok(ShotOutcome::Miss)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 1..=self.size {
            write!(f, " {:>2}", c)?;
        }
        writeln!(f)?;
        for r in 0..self.size {
            write!(f, "{:>2} ", r + 1)?;
            for c in 0..self.size {
                let glyph = match self.grid[r * self.size + c] {
                    Cell::Empty => '.',
                    Cell::Ship if self.reveal_ships => 'S',
                    Cell::Ship => '.',
                    Cell::Hit => 'X',
                    Cell::Miss | Cell::Excluded => 'o',
                };
                write!(f, " {:>2}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
