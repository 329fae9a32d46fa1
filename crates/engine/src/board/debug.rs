use crate::types::*;
use super::Board;

impl Board {
    /// ASCII picture of the grid, Black's back rank on top, '.' for empty squares.
    pub fn debug_board(&self) -> String {
        let view = self.chessboard_view();
        let mut out = String::with_capacity(9 * 20);

        for row in (0..8).rev() {
            out.push_str(&format!("{} ", row + 1));
            for cell in &view[row] {
                out.push(' ');
                out.push(cell.unwrap_or('.'));
            }
            out.push('\n');
        }
        out.push_str("   a b c d e f g h");
        out
    }

    /// Debug game state information
    pub fn debug_state(&self) -> Vec<String> {
        let mut debug_info = Vec::new();

        debug_info.push(format!("Player to move: {}", self.player_color.name()));
        debug_info.push(format!(
            "In check: White={} Black={}",
            self.is_in_check(Side::White),
            self.is_in_check(Side::Black)
        ));

        let move_count: usize = self.safe_squares.values().map(Vec::len).sum();
        debug_info.push(format!(
            "Safe squares: {} pieces can move, {} moves in total",
            self.safe_squares.len(),
            move_count
        ));

        debug_info
    }

    /// One line per movable piece, sorted by square: `e2 P -> e3 e4`.
    pub fn debug_safe_squares(&self) -> Vec<String> {
        let mut sources: Vec<&Square> = self.safe_squares.keys().collect();
        sources.sort();

        sources
            .into_iter()
            .map(|from| {
                let symbol = self.get_piece(*from).map_or('?', |piece| piece.symbol());
                let destinations: Vec<String> = self.safe_squares[from]
                    .iter()
                    .map(Square::to_algebraic)
                    .collect();
                format!("{} {} -> {}", from.to_algebraic(), symbol, destinations.join(" "))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_board_draws_the_starting_position() {
        let picture = Board::new().debug_board();
        let lines: Vec<&str> = picture.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8  r n b q k b n r");
        assert_eq!(lines[3], "5  . . . . . . . .");
        assert_eq!(lines[7], "1  R N B Q K B N R");
        assert_eq!(lines[8], "   a b c d e f g h");
    }

    #[test]
    fn debug_state_reports_counts() {
        let state = Board::new().debug_state();
        assert_eq!(state[0], "Player to move: White");
        assert_eq!(state[1], "In check: White=false Black=false");
        assert_eq!(state[2], "Safe squares: 10 pieces can move, 20 moves in total");
    }

    #[test]
    fn safe_square_lines_are_sorted() {
        let lines = Board::new().debug_safe_squares();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "b1 N -> c3 a3");
        assert_eq!(lines[1], "g1 N -> h3 f3");
        assert_eq!(lines[3], "b2 P -> b3 b4");
    }
}
