use crate::{Board, Piece, Side, Square};
use std::time::Instant;

/// Counts over the legal moves of the side to move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MobilityReport {
    pub sources: u64,
    pub moves: u64,
    pub captures: u64,
    pub checks: u64,
    pub time_ms: u128,
}

impl MobilityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves_per_second(&self) -> u64 {
        if self.time_ms == 0 {
            return 0;
        }
        (self.moves * 1000) / (self.time_ms as u64)
    }
}

#[derive(Debug)]
pub struct MobilityTestCase {
    pub name: &'static str,
    pub player_color: Side,
    /// `(row, col, symbol)` with FEN letters for the pieces.
    pub pieces: &'static [(u8, u8, char)],
    pub expected_moves: u64,
}

// Hand-built positions with known move counts
pub const MOBILITY_POSITIONS: &[MobilityTestCase] = &[
    MobilityTestCase {
        name: "Lone kings",
        player_color: Side::White,
        pieces: &[(0, 4, 'K'), (7, 4, 'k')],
        expected_moves: 5,
    },
    MobilityTestCase {
        name: "Back rank rook check",
        player_color: Side::White,
        pieces: &[(0, 4, 'K'), (0, 0, 'r'), (7, 7, 'k')],
        expected_moves: 3,
    },
    MobilityTestCase {
        name: "Queen on the open e-file",
        player_color: Side::White,
        pieces: &[(0, 4, 'K'), (0, 0, 'R'), (7, 4, 'q'), (7, 0, 'k')],
        expected_moves: 4,
    },
    MobilityTestCase {
        name: "Pinned bishop",
        player_color: Side::White,
        pieces: &[(0, 4, 'K'), (1, 4, 'B'), (5, 4, 'r'), (7, 7, 'k')],
        expected_moves: 4,
    },
];

impl MobilityTestCase {
    pub fn board(&self) -> Board {
        let pieces: Vec<(Square, Piece)> = self
            .pieces
            .iter()
            .filter_map(|&(row, col, symbol)| {
                let square = Square::try_new(row as i8, col as i8)?;
                Piece::from_symbol(symbol).map(|piece| (square, piece))
            })
            .collect();
        Board::with_pieces(self.player_color, &pieces)
    }
}

/// Walks the legal moves of the side to move and tallies captures and checks.
pub fn analyze(board: &mut Board) -> MobilityReport {
    let start_time = Instant::now();
    let mut result = MobilityReport::new();

    let side = board.player_color();
    let safe_squares = board.find_safe_squares();

    for (&from, destinations) in &safe_squares {
        result.sources += 1;

        for &to in destinations {
            result.moves += 1;

            if board.get_piece(to).is_some() {
                result.captures += 1;
            }

            if board.simulate_move(from, to).is_in_check(side.opposite()) {
                result.checks += 1;
            }
        }
    }

    result.time_ms = start_time.elapsed().as_millis();
    result
}

/// Legal move count per movable piece, sorted by square.
pub fn divide(board: &Board) -> Vec<(Square, usize)> {
    let mut counts: Vec<(Square, usize)> = board
        .safe_squares()
        .iter()
        .map(|(&from, destinations)| (from, destinations.len()))
        .collect();
    counts.sort();
    counts
}

/// Runs every entry of `MOBILITY_POSITIONS` and reports `(name, got, expected)`.
pub fn run_mobility_suite() -> Vec<(&'static str, u64, u64)> {
    MOBILITY_POSITIONS
        .iter()
        .map(|case| {
            let mut board = case.board();
            let report = analyze(&mut board);
            (case.name, report.moves, case.expected_moves)
        })
        .collect()
}
