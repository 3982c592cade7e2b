use crate::board::Board;
use crate::pieces::PieceKind;

/// Where and what was placed.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Placement {
    pub square: u16,
    pub kind: PieceKind,
}

/// One complete non-attacking placement, in placement (increasing-square)
/// order.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Solution {
    pub placements: Vec<Placement>,
}

impl Solution {
    /// ASCII board: one row per line, piece symbols on their squares and
    /// `.` elsewhere.
    pub fn render(&self, board: Board) -> String {
        let mut cells = vec!['.'; board.size()];
        for p in &self.placements {
            cells[p.square as usize] = p.kind.symbol();
        }

        let mut out = String::with_capacity(board.size() + board.rows as usize);
        for r in 0..board.rows {
            for c in 0..board.cols {
                out.push(cells[r as usize * board.cols as usize + c as usize]);
            }
            out.push('\n');
        }
        out
    }
}
