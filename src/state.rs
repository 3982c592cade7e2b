use crate::attacks::{AttackTable, BitBoard};
use crate::pieces::PieceKind;

/// A full copy of the board's attacked/occupancy state, restorable exactly.
#[derive(Clone, Debug)]
pub struct BoardSnapshot {
    attacked: BitBoard,
}

/// The mutable board during one search pass: which squares are attacked by
/// (or occupied by) any already-placed piece.
///
/// Placement merges the precomputed attack mask in; removal is by restoring
/// a snapshot taken before the placement. Merged masks of different pieces
/// may overlap, so the OR is not invertible and a structural restore is the
/// only correct undo.
#[derive(Clone, Debug)]
pub struct BoardState {
    attacked: BitBoard,
}

impl BoardState {
    pub fn empty(num_squares: usize) -> Self {
        Self {
            attacked: BitBoard::new(num_squares),
        }
    }

    /// True iff no placed piece attacks or occupies this square.
    #[inline]
    pub fn is_safe(&self, sq: u16) -> bool {
        !self.attacked.get(sq)
    }

    /// Place a piece: merge its attack mask (which includes `sq` itself)
    /// into the board.
    #[inline]
    pub fn apply(&mut self, table: &AttackTable, kind: PieceKind, sq: u16) {
        self.attacked.union_with(table.mask(kind, sq));
    }

    #[inline]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            attacked: self.attacked.clone(),
        }
    }

    #[inline]
    pub fn restore(&mut self, snap: BoardSnapshot) {
        self.attacked = snap.attacked;
    }

    /// Back to an empty board, for the next ordering's pass.
    #[inline]
    pub fn reset(&mut self) {
        self.attacked.clear_all();
    }
}
