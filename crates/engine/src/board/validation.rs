use crate::piece::{Direction, PieceKind};
use crate::types::*;
use super::Board;


impl Board {
    /// Whether the king of `side` is attacked by any opposing piece.
    pub fn is_in_check(&self, side: Side) -> bool {
        for (from, piece) in self.pieces_of(side.opposite()) {
            for &direction in piece.directions() {
                let attacks_king = match piece.kind() {
                    // Pawns never attack straight ahead.
                    PieceKind::Pawn if direction.is_straight() => false,
                    PieceKind::Pawn | PieceKind::Knight | PieceKind::King => {
                        self.step_hits_king(from, direction, side)
                    }
                    PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                        self.ray_hits_king(from, direction, side)
                    }
                };

                if attacks_king {
                    return true;
                }
            }
        }

        false
    }

    fn step_hits_king(&self, from: Square, direction: Direction, side: Side) -> bool {
        match from.offset(direction.dr, direction.dc) {
            Some(target) => self.holds_king_of(target, side),
            None => false,
        }
    }

    /// Walk the ray until the edge or the first piece; only the king of `side` counts as a hit.
    fn ray_hits_king(&self, from: Square, direction: Direction, side: Side) -> bool {
        for target in from.ray(direction.dr, direction.dc) {
            if let Some(piece) = self.get_piece(target) {
                return piece.is_king_of(side);
            }
        }
        false
    }

    fn holds_king_of(&self, square: Square, side: Side) -> bool {
        self.get_piece(square).map_or(false, |piece| piece.is_king_of(side))
    }
}
