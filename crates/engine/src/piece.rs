use crate::types::Side;

/// A single probe vector, in rows and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    /// Straight ahead for a pawn, diagonal otherwise.
    pub fn is_straight(&self) -> bool {
        self.dc == 0
    }

    pub fn is_double_step(&self) -> bool {
        self.dr.abs() == 2 && self.dc == 0
    }
}

const fn d(dr: i8, dc: i8) -> Direction {
    Direction::new(dr, dc)
}

pub const WHITE_PAWN_DIRS: [Direction; 4] = [d(1, 0), d(2, 0), d(1, 1), d(1, -1)];
pub const BLACK_PAWN_DIRS: [Direction; 4] = [d(-1, 0), d(-2, 0), d(-1, 1), d(-1, -1)];

pub const KNIGHT_DIRS: [Direction; 8] = [
    d(1, 2),
    d(1, -2),
    d(-1, 2),
    d(-1, -2),
    d(2, 1),
    d(2, -1),
    d(-2, 1),
    d(-2, -1),
];

pub const BISHOP_DIRS: [Direction; 4] = [d(1, 1), d(1, -1), d(-1, 1), d(-1, -1)];

pub const ROOK_DIRS: [Direction; 4] = [d(1, 0), d(-1, 0), d(0, 1), d(0, -1)];

// Queen and king probe the same eight vectors; the king just never slides.
pub const QUEEN_DIRS: [Direction; 8] = [
    d(1, 0),
    d(-1, 0),
    d(0, 1),
    d(0, -1),
    d(1, 1),
    d(1, -1),
    d(-1, 1),
    d(-1, -1),
];

pub const KING_DIRS: [Direction; 8] = QUEEN_DIRS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Sliding pieces repeat their vector until blocked.
    pub fn is_sliding(self) -> bool {
        match self {
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => true,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    side: Side,
    directions: &'static [Direction],
}

impl Piece {
    pub fn new(kind: PieceKind, side: Side) -> Self {
        let directions: &'static [Direction] = match kind {
            PieceKind::Pawn => match side {
                Side::White => &WHITE_PAWN_DIRS,
                Side::Black => &BLACK_PAWN_DIRS,
            },
            PieceKind::Knight => &KNIGHT_DIRS,
            PieceKind::Bishop => &BISHOP_DIRS,
            PieceKind::Rook => &ROOK_DIRS,
            PieceKind::Queen => &QUEEN_DIRS,
            PieceKind::King => &KING_DIRS,
        };

        Self { kind, side, directions }
    }

    pub fn pawn(side: Side) -> Self {
        Self::new(PieceKind::Pawn, side)
    }

    pub fn knight(side: Side) -> Self {
        Self::new(PieceKind::Knight, side)
    }

    pub fn bishop(side: Side) -> Self {
        Self::new(PieceKind::Bishop, side)
    }

    pub fn rook(side: Side) -> Self {
        Self::new(PieceKind::Rook, side)
    }

    pub fn queen(side: Side) -> Self {
        Self::new(PieceKind::Queen, side)
    }

    pub fn king(side: Side) -> Self {
        Self::new(PieceKind::King, side)
    }

    /// Inverse of `symbol`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        let kind = match symbol.to_ascii_lowercase() {
            'p' => PieceKind::Pawn,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'r' => PieceKind::Rook,
            'q' => PieceKind::Queen,
            'k' => PieceKind::King,
            _ => return None,
        };

        let side = if symbol.is_ascii_uppercase() { Side::White } else { Side::Black };
        Some(Self::new(kind, side))
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn directions(&self) -> &'static [Direction] {
        self.directions
    }

    pub fn is_sliding(&self) -> bool {
        self.kind.is_sliding()
    }

    pub fn is_king_of(&self, side: Side) -> bool {
        self.kind == PieceKind::King && self.side == side
    }

    /// FEN letter, uppercase for White. Display only.
    pub fn symbol(&self) -> char {
        let letter = match self.kind {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        };

        match self.side {
            Side::White => letter.to_ascii_uppercase(),
            Side::Black => letter,
        }
    }
}
