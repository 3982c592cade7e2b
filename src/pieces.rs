use crate::coord::Coord;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PieceKind {
    /// Kinds in decreasing attack reach. This is the order groups are
    /// flattened in, so the first ordering a search tries places the
    /// longest-reaching pieces first.
    pub const BY_REACH: [PieceKind; 5] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::King,
        PieceKind::Knight,
    ];

    /// Dense index used by per-kind lookup tables.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Rook => 2,
            PieceKind::Bishop => 3,
            PieceKind::Knight => 4,
        }
    }

    /// Unit directions for sliding pieces.
    #[inline]
    pub fn slide_dirs(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            Queen => &QUEEN_DIRS,
            Rook => &ROOK_DIRS,
            Bishop => &BISHOP_DIRS,
            _ => &[],
        }
    }

    /// Fixed single-step offsets for non-sliding pieces.
    #[inline]
    pub fn step_deltas(self) -> &'static [Coord] {
        use PieceKind::*;
        match self {
            King => &KING_DELTAS,
            Knight => &KNIGHT_DELTAS,
            _ => &[],
        }
    }

    #[inline]
    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
        }
    }
}

pub const ROOK_DIRS: [Coord; 4] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
];

pub const BISHOP_DIRS: [Coord; 4] = [
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];

pub const QUEEN_DIRS: [Coord; 8] = [
    Coord { row: 1, col: 0 },
    Coord { row: -1, col: 0 },
    Coord { row: 0, col: 1 },
    Coord { row: 0, col: -1 },
    Coord { row: 1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: -1, col: -1 },
];

pub const KING_DELTAS: [Coord; 8] = [
    Coord { row: -1, col: 0 },
    Coord { row: 1, col: 0 },
    Coord { row: 0, col: -1 },
    Coord { row: 0, col: 1 },
    Coord { row: -1, col: -1 },
    Coord { row: -1, col: 1 },
    Coord { row: 1, col: -1 },
    Coord { row: 1, col: 1 },
];

pub const KNIGHT_DELTAS: [Coord; 8] = [
    Coord { row: -2, col: -1 },
    Coord { row: -2, col: 1 },
    Coord { row: -1, col: -2 },
    Coord { row: -1, col: 2 },
    Coord { row: 1, col: -2 },
    Coord { row: 1, col: 2 },
    Coord { row: 2, col: -1 },
    Coord { row: 2, col: 1 },
];

/// The piece multiset to place. Only counts per kind matter; pieces of one
/// kind are indistinguishable.
#[derive(Clone, Debug, Default)]
pub struct Material {
    pub kings: u32,
    pub queens: u32,
    pub rooks: u32,
    pub bishops: u32,
    pub knights: u32,
}

impl Material {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kings(mut self, n: u32) -> Self {
        self.kings = n;
        self
    }

    pub fn with_queens(mut self, n: u32) -> Self {
        self.queens = n;
        self
    }

    pub fn with_rooks(mut self, n: u32) -> Self {
        self.rooks = n;
        self
    }

    pub fn with_bishops(mut self, n: u32) -> Self {
        self.bishops = n;
        self
    }

    pub fn with_knights(mut self, n: u32) -> Self {
        self.knights = n;
        self
    }

    #[inline]
    pub fn count(&self, kind: PieceKind) -> u32 {
        match kind {
            PieceKind::King => self.kings,
            PieceKind::Queen => self.queens,
            PieceKind::Rook => self.rooks,
            PieceKind::Bishop => self.bishops,
            PieceKind::Knight => self.knights,
        }
    }

    pub fn total(&self) -> usize {
        PieceKind::BY_REACH
            .iter()
            .map(|&k| self.count(k) as usize)
            .sum()
    }

    /// Per-kind counts in decreasing attack reach.
    pub fn counts(&self) -> [(PieceKind, u32); 5] {
        PieceKind::BY_REACH.map(|k| (k, self.count(k)))
    }
}
