use crate::board::Board;
use crate::pieces::PieceKind;

/// One bit per board square.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BitBoard {
    data: Vec<u64>,
}

impl BitBoard {
    pub fn new(num_squares: usize) -> Self {
        let words = num_squares.div_ceil(64);
        Self { data: vec![0; words] }
    }

    #[inline]
    pub fn set(&mut self, sq: u16) {
        let i = sq as usize;
        self.data[i >> 6] |= 1u64 << (i & 63);
    }

    #[inline]
    pub fn get(&self, sq: u16) -> bool {
        let i = sq as usize;
        (self.data[i >> 6] >> (i & 63)) & 1u64 == 1u64
    }

    #[inline]
    pub fn union_with(&mut self, other: &BitBoard) {
        debug_assert_eq!(self.data.len(), other.data.len());
        for (w, o) in self.data.iter_mut().zip(&other.data) {
            *w |= o;
        }
    }

    #[inline]
    pub fn clear_all(&mut self) {
        self.data.fill(0);
    }
}

/// Precomputed attack masks: for every square and every piece kind, the set
/// of squares a piece of that kind placed there would attack.
///
/// Every mask includes its own origin square, so one bitset doubles as both
/// attack and occupancy state. Built once per board and shared read-only by
/// every search pass afterwards.
#[derive(Clone, Debug)]
pub struct AttackTable {
    board: Board,
    masks: Vec<BitBoard>,
}

impl AttackTable {
    pub fn build(board: Board) -> Self {
        let n = board.size();
        let mut masks = Vec::with_capacity(5 * n);

        for kind in [
            PieceKind::King,
            PieceKind::Queen,
            PieceKind::Rook,
            PieceKind::Bishop,
            PieceKind::Knight,
        ] {
            for sq in 0..n as u32 {
                masks.push(mask_for(board, kind, sq as u16));
            }
        }

        Self { board, masks }
    }

    #[inline]
    pub fn board(&self) -> Board {
        self.board
    }

    #[inline]
    pub fn mask(&self, kind: PieceKind, sq: u16) -> &BitBoard {
        &self.masks[kind.index() * self.board.size() + sq as usize]
    }
}

fn mask_for(board: Board, kind: PieceKind, sq: u16) -> BitBoard {
    let mut mask = BitBoard::new(board.size());
    let origin = board.coord_of(sq);

    // A piece occupies its own square.
    mask.set(sq);

    for &d in kind.step_deltas() {
        if let Some(t) = board.sq_of(origin + d) {
            mask.set(t);
        }
    }

    for &d in kind.slide_dirs() {
        let mut cur = origin + d;
        while let Some(t) = board.sq_of(cur) {
            mask.set(t);
            cur = cur + d;
        }
    }

    mask
}
