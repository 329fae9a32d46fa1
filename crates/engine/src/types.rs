use std::collections::HashMap;

pub const BOARD_SIZE: u8 = 8;

/// A board coordinate. Row 0 is White's back rank, column 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(pub u8);

impl Square {
    /// Callers must pass coordinates inside the board.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "square ({}, {}) is off the board",
            row,
            col
        );
        Self(row * BOARD_SIZE + col)
    }

    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if are_coords_valid(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.0 / BOARD_SIZE
    }

    pub fn col(&self) -> u8 {
        self.0 % BOARD_SIZE
    }

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The square `dr` rows and `dc` columns away, if it is still on the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        Self::try_new(self.row() as i8 + dr, self.col() as i8 + dc)
    }

    /// Squares along `(dr, dc)`, starting next to `self` and ending at the edge.
    pub fn ray(self, dr: i8, dc: i8) -> impl Iterator<Item = Square> {
        std::iter::successors(self.offset(dr, dc), move |square| square.offset(dr, dc))
    }

    /// Maps a point inside the drawn board to a square. Row 0 is drawn at the bottom.
    pub fn from_coords(x: f32, y: f32, square_size: f32) -> Option<Self> {
        if x < 0.0 || y < 0.0 || square_size <= 0.0 {
            return None;
        }

        let col = (x / square_size) as u8;
        let screen_row = (y / square_size) as u8;

        if col < BOARD_SIZE && screen_row < BOARD_SIZE {
            Some(Self::new(BOARD_SIZE - 1 - screen_row, col))
        } else {
            None
        }
    }

    pub fn to_algebraic(&self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'1' + self.row()) as char;
        format!("{}{}", file, rank)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Square)
    }
}

pub fn are_coords_valid(row: i8, col: i8) -> bool {
    row >= 0 && col >= 0 && row < BOARD_SIZE as i8 && col < BOARD_SIZE as i8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a pawn step for this side.
    pub fn forward(self) -> i8 {
        match self {
            Side::White => 1,
            Side::Black => -1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Side::White => 1,
            Side::Black => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::White => "White",
            Side::Black => "Black",
        }
    }
}

/// Legal destinations per source square for the side to move.
pub type SafeSquares = HashMap<Square, Vec<Square>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_round_trips_row_and_col() {
        for row in 0..8 {
            for col in 0..8 {
                let square = Square::new(row, col);
                assert_eq!(square.row(), row);
                assert_eq!(square.col(), col);
            }
        }
    }

    #[test]
    fn offset_stays_on_the_board() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2)));

        let far_corner = Square::new(7, 7);
        assert_eq!(far_corner.offset(1, 0), None);
        assert_eq!(far_corner.offset(0, 1), None);
        assert_eq!(far_corner.offset(-2, -1), Some(Square::new(5, 6)));
    }

    #[test]
    fn ray_runs_to_the_edge() {
        let squares: Vec<Square> = Square::new(2, 5).ray(1, 1).collect();
        assert_eq!(squares, vec![Square::new(3, 6), Square::new(4, 7)]);
        assert_eq!(Square::new(0, 0).ray(0, 1).count(), 7);
        assert_eq!(Square::new(0, 0).ray(-1, 0).count(), 0);
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn new_rejects_out_of_range_coordinates() {
        Square::new(8, 0);
    }

    #[test]
    fn algebraic_names_use_col_as_file() {
        assert_eq!(Square::new(0, 0).to_algebraic(), "a1");
        assert_eq!(Square::new(0, 4).to_algebraic(), "e1");
        assert_eq!(Square::new(7, 7).to_algebraic(), "h8");
        assert_eq!(Square::new(3, 4).to_algebraic(), "e4");
    }

    #[test]
    fn screen_coords_flip_rows() {
        // Top-left pixel belongs to row 7.
        assert_eq!(Square::from_coords(1.0, 1.0, 50.0), Some(Square::new(7, 0)));
        assert_eq!(Square::from_coords(399.0, 399.0, 50.0), Some(Square::new(0, 7)));
        assert_eq!(Square::from_coords(400.0, 10.0, 50.0), None);
        assert_eq!(Square::from_coords(-1.0, 10.0, 50.0), None);
    }

    #[test]
    fn side_helpers() {
        assert_eq!(Side::White.opposite(), Side::Black);
        assert_eq!(Side::Black.opposite(), Side::White);
        assert_eq!(Side::White.forward(), 1);
        assert_eq!(Side::Black.forward(), -1);
        assert_eq!(Side::White.pawn_start_row(), 1);
        assert_eq!(Side::Black.pawn_start_row(), 6);
    }
}
