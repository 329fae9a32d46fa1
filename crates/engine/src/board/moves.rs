use crate::piece::{Direction, Piece, PieceKind};
use crate::types::*;
use super::Board;



impl Board {
    /// Legal destinations for every piece of the side to move, rebuilt from scratch.
    ///
    /// Each pseudo-legal destination is played on the grid, the mover's king is
    /// tested for check, and the grid is restored before the next candidate.
    /// Squares whose piece has no legal destination are left out.
    pub fn find_safe_squares(&mut self) -> SafeSquares {
        let mut safe_squares = SafeSquares::new();
        let side = self.player_color;

        for from in Square::all() {
            let piece = match self.get_piece(from) {
                Some(piece) if piece.side() == side => piece,
                _ => continue,
            };

            let piece_safe_squares: Vec<Square> = self
                .pseudo_legal_moves(from, piece)
                .into_iter()
                .filter(|&to| self.is_position_safe_after_move(from, to))
                .collect();

            if !piece_safe_squares.is_empty() {
                safe_squares.insert(from, piece_safe_squares);
            }
        }

        safe_squares
    }

    /// Destinations reachable by movement geometry alone, ignoring king safety.
    /// Works for either side.
    pub fn get_pseudo_legal_moves(&self, square: Square) -> Vec<Square> {
        match self.get_piece(square) {
            Some(piece) => self.pseudo_legal_moves(square, piece),
            None => Vec::new(),
        }
    }

    fn pseudo_legal_moves(&self, from: Square, piece: Piece) -> Vec<Square> {
        let mut moves = Vec::new();

        for &direction in piece.directions() {
            match piece.kind() {
                PieceKind::Pawn => {
                    if let Some(to) = self.pawn_target(from, piece, direction) {
                        moves.push(to);
                    }
                }
                PieceKind::Knight | PieceKind::King => {
                    if let Some(to) = from.offset(direction.dr, direction.dc) {
                        if !self.is_friendly(to, piece.side()) {
                            moves.push(to);
                        }
                    }
                }
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    self.push_sliding_moves(from, piece.side(), direction, &mut moves);
                }
            }
        }

        moves
    }

    /// Pawn pushes need empty squares; diagonals need something to capture.
    fn pawn_target(&self, from: Square, pawn: Piece, direction: Direction) -> Option<Square> {
        let to = from.offset(direction.dr, direction.dc)?;
        let target = self.get_piece(to);

        let allowed = if direction.is_double_step() {
            let between = from.offset(direction.dr / 2, 0)?;
            from.row() == pawn.side().pawn_start_row()
                && target.is_none()
                && self.get_piece(between).is_none()
        } else if direction.is_straight() {
            target.is_none()
        } else {
            matches!(target, Some(other) if other.side() != pawn.side())
        };

        if allowed {
            Some(to)
        } else {
            None
        }
    }

    fn push_sliding_moves(&self, from: Square, side: Side, direction: Direction, moves: &mut Vec<Square>) {
        for to in from.ray(direction.dr, direction.dc) {
            match self.get_piece(to) {
                None => moves.push(to),
                Some(piece) => {
                    if piece.side() != side {
                        moves.push(to);
                    }
                    break;
                }
            }
        }
    }

    fn is_friendly(&self, square: Square, side: Side) -> bool {
        self.get_piece(square).map_or(false, |piece| piece.side() == side)
    }

    /// Plays `from -> to` on a scratch basis and reports whether the mover's king is safe.
    fn is_position_safe_after_move(&mut self, from: Square, to: Square) -> bool {
        let side = match self.get_piece(from) {
            Some(piece) => piece.side(),
            None => return false,
        };

        !self.simulate_move(from, to).is_in_check(side)
    }
}
