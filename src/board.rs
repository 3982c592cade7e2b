use crate::coord::Coord;

/// An M×N board with the fixed row-major square numbering
/// `square = row * cols + col`.
///
/// Square indices are `u16`, so a board may hold at most 65536 squares;
/// [`crate::problem::Problem::validate`] rejects anything larger before a
/// search is attempted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Board {
    pub rows: u16,
    pub cols: u16,
}

impl Board {
    #[inline]
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// The coordinate for a square index.
    #[inline]
    pub fn coord_of(&self, sq: u16) -> Coord {
        debug_assert!(self.cols > 0, "degenerate board has no squares");
        debug_assert!((sq as usize) < self.size());
        Coord::new((sq / self.cols) as i16, (sq % self.cols) as i16)
    }

    /// Returns the square index for this coordinate if it is on the board.
    #[inline]
    pub fn sq_of(&self, coord: Coord) -> Option<u16> {
        if coord.row < 0
            || coord.col < 0
            || coord.row >= self.rows as i16
            || coord.col >= self.cols as i16
        {
            return None;
        }
        Some(coord.row as u16 * self.cols + coord.col as u16)
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.sq_of(coord).is_some()
    }
}
