use engine::{Board, Square};

/// What a click did to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected { square: Square, symbol: char },
    Cleared,
    MoveRequested { from: Square, to: Square },
    Ignored,
}

/// The piece the user picked and where it may go.
#[derive(Debug, Default, Clone)]
pub struct Selection {
    selected: Option<Square>,
    piece_safe_squares: Vec<Square>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn piece_safe_squares(&self) -> &[Square] {
        &self.piece_safe_squares
    }

    /// Selects whatever stands on `square`. Pieces with no legal move get an empty list.
    pub fn select(&mut self, board: &Board, square: Square) -> Option<char> {
        let symbol = board.chessboard_view()[square.row() as usize][square.col() as usize]?;
        self.selected = Some(square);
        self.piece_safe_squares = board.safe_squares().get(&square).cloned().unwrap_or_default();
        Some(symbol)
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.piece_safe_squares.clear();
    }

    pub fn is_square_selected(&self, square: Square) -> bool {
        self.selected == Some(square)
    }

    pub fn is_square_safe_for_selected_piece(&self, square: Square) -> bool {
        self.piece_safe_squares.contains(&square)
    }

    pub fn handle_click(&mut self, board: &Board, clicked: Square) -> ClickOutcome {
        if let Some(selected) = self.selected {
            if selected == clicked {
                self.clear();
                return ClickOutcome::Cleared;
            }
            if self.is_square_safe_for_selected_piece(clicked) {
                return ClickOutcome::MoveRequested { from: selected, to: clicked };
            }
        }

        match self.select(board, clicked) {
            Some(symbol) => ClickOutcome::Selected { square: clicked, symbol },
            None if self.selected.is_some() => {
                self.clear();
                ClickOutcome::Cleared
            }
            None => ClickOutcome::Ignored,
        }
    }
}
