use std::ops::Deref;

use crate::piece::Piece;
use crate::types::*;
use super::Board;

/// A move played on the live grid for as long as this guard lives.
///
/// The guard holds the only borrow of the board, so nothing else can look at
/// the half-moved position. Dropping it puts the moved piece back on its
/// source square and returns whatever it displaced to the destination. The
/// cached safe squares are not touched while the move is in place.
#[derive(Debug)]
pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    displaced: Option<Piece>,
}

impl Board {
    pub fn simulate_move(&mut self, from: Square, to: Square) -> SimulatedMove<'_> {
        let moving = self.squares[from.index()].take();
        let displaced = std::mem::replace(&mut self.squares[to.index()], moving);

        SimulatedMove {
            board: self,
            from,
            to,
            displaced,
        }
    }
}

impl SimulatedMove<'_> {
    pub fn from(&self) -> Square {
        self.from
    }

    pub fn to(&self) -> Square {
        self.to
    }

    /// The piece that stood on the destination before the move, if any.
    pub fn displaced(&self) -> Option<Piece> {
        self.displaced
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        let moved = std::mem::replace(&mut self.board.squares[self.to.index()], self.displaced.take());
        self.board.squares[self.from.index()] = moved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_is_undone_on_drop() {
        let mut board = Board::with_pieces(
            Side::White,
            &[
                (Square::new(0, 0), Piece::rook(Side::White)),
                (Square::new(5, 0), Piece::knight(Side::Black)),
                (Square::new(0, 4), Piece::king(Side::White)),
            ],
        );
        let before = board.clone();

        {
            let simulated = board.simulate_move(Square::new(0, 0), Square::new(5, 0));
            assert_eq!(simulated.get_piece(Square::new(0, 0)), None);
            assert_eq!(simulated.get_piece(Square::new(5, 0)), Some(Piece::rook(Side::White)));
            assert_eq!(simulated.displaced(), Some(Piece::knight(Side::Black)));
        }

        assert_eq!(board, before);
    }

    #[test]
    fn quiet_move_is_undone_on_drop() {
        let mut board = Board::new();
        let before = board.clone();

        let in_check = board
            .simulate_move(Square::new(1, 4), Square::new(3, 4))
            .is_in_check(Side::White);

        assert!(!in_check);
        assert_eq!(board, before);
    }

    #[test]
    fn early_return_still_restores() {
        fn probe(board: &mut Board) -> Option<()> {
            let simulated = board.simulate_move(Square::new(0, 1), Square::new(2, 2));
            simulated.get_piece(Square::new(4, 4))?;
            Some(())
        }

        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(probe(&mut board), None);
        assert_eq!(board, before);
    }
}
