//! Ship geometry and hit tracking.

use crate::coord::Coord;

/// Orientation of a ship on the board.
///
/// Vertical ships extend along the row axis, horizontal ships along the
/// column axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A line of cells with an origin, a length and a hit counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    origin: Coord,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Ship {
    /// Create a ship at `origin` with all segments intact. Whether it
    /// actually fits a board is decided at placement time.
    pub fn new(origin: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
            remaining_hits: length,
        }
    }

    /// The cells occupied by the ship, in order from the origin.
    pub fn dots(&self) -> Vec<Coord> {
        (0..self.length as i32)
            .map(|i| match self.orientation {
                Orientation::Vertical => self.origin.offset(i, 0),
                Orientation::Horizontal => self.origin.offset(0, i),
            })
            .collect()
    }

    /// Whether the ship occupies the given cell.
    pub fn covers(&self, c: Coord) -> bool {
        let len = self.length as i32;
        match self.orientation {
            Orientation::Vertical => {
                c.col == self.origin.col
                    && c.row >= self.origin.row
                    && c.row < self.origin.row + len
            }
            Orientation::Horizontal => {
                c.row == self.origin.row
                    && c.col >= self.origin.col
                    && c.col < self.origin.col + len
            }
        }
    }

    /// Register one hit. Only the board's shot resolution calls this.
    pub(crate) fn register_hit(&mut self) {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
    }

    /// A ship with no intact segments left is sunk.
    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn vertical_ships_step_along_rows() {
        let ship = Ship::new(Coord::new(1, 2), 3, Orientation::Vertical);
        assert_eq!(
            ship.dots(),
            vec![Coord::new(1, 2), Coord::new(2, 2), Coord::new(3, 2)]
        );
    }

    #[test]
    fn horizontal_ships_step_along_columns() {
        let ship = Ship::new(Coord::new(1, 2), 3, Orientation::Horizontal);
        assert_eq!(
            ship.dots(),
            vec![Coord::new(1, 2), Coord::new(1, 3), Coord::new(1, 4)]
        );
    }

    #[test]
    fn sinks_after_exactly_length_hits() {
        let mut ship = Ship::new(Coord::new(0, 0), 2, Orientation::Horizontal);
        assert!(!ship.is_sunk());
        ship.register_hit();
        assert!(!ship.is_sunk());
        assert_eq!(ship.remaining_hits(), 1);
        ship.register_hit();
        assert!(ship.is_sunk());
        assert_eq!(ship.remaining_hits(), 0);
    }

    #[test]
    fn hits_never_go_negative() {
        let mut ship = Ship::new(Coord::new(0, 0), 1, Orientation::Vertical);
        ship.register_hit();
        ship.register_hit();
        assert_eq!(ship.remaining_hits(), 0);
    }

    #[test]
    fn covers_rejects_cells_off_the_line() {
        let ship = Ship::new(Coord::new(2, 2), 2, Orientation::Vertical);
        assert!(ship.covers(Coord::new(2, 2)));
        assert!(ship.covers(Coord::new(3, 2)));
        assert!(!ship.covers(Coord::new(4, 2)));
        assert!(!ship.covers(Coord::new(2, 3)));
        assert!(!ship.covers(Coord::new(1, 2)));
    }

    proptest! {
        #[test]
        fn dots_are_contiguous_along_one_axis(
            row in 0i32..20,
            col in 0i32..20,
            len in 1usize..6,
            vertical in any::<bool>(),
        ) {
            let orientation = if vertical {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let ship = Ship::new(Coord::new(row, col), len, orientation);
            let dots = ship.dots();
            prop_assert_eq!(dots.len(), len);
            prop_assert_eq!(dots[0], Coord::new(row, col));
            for pair in dots.windows(2) {
                let step = (pair[1].row - pair[0].row, pair[1].col - pair[0].col);
                match orientation {
                    Orientation::Vertical => prop_assert_eq!(step, (1, 0)),
                    Orientation::Horizontal => prop_assert_eq!(step, (0, 1)),
                }
            }
            for d in &dots {
                prop_assert!(ship.covers(*d));
            }
        }
    }
}
