use std::ops::Add;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    pub row: i16,
    pub col: i16,
}

impl Coord {
    #[inline]
    pub const fn new(row: i16, col: i16) -> Self {
        Self { row, col }
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.row + rhs.row, self.col + rhs.col)
    }
}
