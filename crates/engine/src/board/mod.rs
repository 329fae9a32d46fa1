use crate::piece::{Piece, PieceKind};
use crate::types::*;
// Declare submodules
pub mod moves;
pub mod validation;
pub mod state;
pub mod debug;

pub use state::SimulatedMove;

/// Symbol grid handed to renderers, indexed `[row][col]`.
pub type BoardView = [[Option<char>; 8]; 8];

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    player_color: Side,
    safe_squares: SafeSquares,
}

impl Board {
    /// Standard starting position with White to move.
    pub fn new() -> Self {
        let mut board = Self::blank(Side::White);
        board.setup_starting_position();
        board.refresh_safe_squares();
        board
    }

    /// No pieces at all. Useful as a base for hand-built positions.
    pub fn empty(player_color: Side) -> Self {
        Self::blank(player_color)
    }

    pub fn with_pieces(player_color: Side, pieces: &[(Square, Piece)]) -> Self {
        let mut board = Self::blank(player_color);
        for &(square, piece) in pieces {
            board.set_piece(square, Some(piece));
        }
        board.refresh_safe_squares();
        board
    }

    fn blank(player_color: Side) -> Self {
        Self {
            squares: [None; 64],
            player_color,
            safe_squares: SafeSquares::new(),
        }
    }

    fn setup_starting_position(&mut self) {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            self.set_piece(Square::new(0, col), Some(Piece::new(kind, Side::White)));
            self.set_piece(Square::new(1, col), Some(Piece::pawn(Side::White)));
            self.set_piece(Square::new(6, col), Some(Piece::pawn(Side::Black)));
            self.set_piece(Square::new(7, col), Some(Piece::new(kind, Side::Black)));
        }
    }

    // Basic board operations
    pub fn get_piece(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    pub(crate) fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    /// Puts `piece` on `square` (or clears it) and recomputes the safe squares.
    pub fn place(&mut self, square: Square, piece: Option<Piece>) {
        self.set_piece(square, piece);
        self.refresh_safe_squares();
    }

    pub fn player_color(&self) -> Side {
        self.player_color
    }

    /// Legal destinations for the side to move, as of the last refresh.
    pub fn safe_squares(&self) -> &SafeSquares {
        &self.safe_squares
    }

    pub fn refresh_safe_squares(&mut self) {
        self.safe_squares = self.find_safe_squares();
    }

    pub fn chessboard_view(&self) -> BoardView {
        let mut view = [[None; 8]; 8];
        for square in Square::all() {
            view[square.row() as usize][square.col() as usize] =
                self.get_piece(square).map(|piece| piece.symbol());
        }
        view
    }

    /// Checkerboard coloring, independent of what stands on the square.
    pub fn is_square_dark(row: u8, col: u8) -> bool {
        (row % 2 == 0) == (col % 2 == 0)
    }

    /// Occupied squares holding a piece of `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| match self.get_piece(square) {
            Some(piece) if piece.side() == side => Some((square, piece)),
            _ => None,
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_thirty_two_pieces() {
        let board = Board::new();
        assert_eq!(board.pieces_of(Side::White).count(), 16);
        assert_eq!(board.pieces_of(Side::Black).count(), 16);
        assert_eq!(board.player_color(), Side::White);

        assert_eq!(board.get_piece(Square::new(0, 4)), Some(Piece::king(Side::White)));
        assert_eq!(board.get_piece(Square::new(7, 3)), Some(Piece::queen(Side::Black)));
        for row in 2..6 {
            for col in 0..8 {
                assert_eq!(board.get_piece(Square::new(row, col)), None);
            }
        }
    }

    #[test]
    fn view_mirrors_the_grid() {
        let view = Board::new().chessboard_view();
        assert_eq!(view[0], [Some('R'), Some('N'), Some('B'), Some('Q'), Some('K'), Some('B'), Some('N'), Some('R')]);
        assert_eq!(view[1], [Some('P'); 8]);
        assert_eq!(view[4], [None; 8]);
        assert_eq!(view[6], [Some('p'); 8]);
        assert_eq!(view[7], [Some('r'), Some('n'), Some('b'), Some('q'), Some('k'), Some('b'), Some('n'), Some('r')]);
    }

    #[test]
    fn dark_squares_follow_parity() {
        assert!(Board::is_square_dark(0, 0));
        assert!(!Board::is_square_dark(0, 1));
        assert!(Board::is_square_dark(7, 7));
        for row in 0..8 {
            for col in 0..8 {
                assert_eq!(
                    Board::is_square_dark(row, col),
                    Board::is_square_dark(col, row),
                    "parity must be symmetric at ({}, {})",
                    row,
                    col
                );
            }
        }
    }

    #[test]
    fn place_refreshes_safe_squares() {
        let king = Square::new(0, 4);
        let mut board = Board::with_pieces(
            Side::White,
            &[(king, Piece::king(Side::White)), (Square::new(7, 0), Piece::king(Side::Black))],
        );
        assert_eq!(board.safe_squares()[&king].len(), 5);

        board.place(Square::new(1, 4), Some(Piece::pawn(Side::White)));
        assert_eq!(board.safe_squares()[&king].len(), 4);
        assert!(board.safe_squares().contains_key(&Square::new(1, 4)));
    }
}
