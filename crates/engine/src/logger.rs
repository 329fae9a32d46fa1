use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use crate::{Board, Side, Square};

/// Buffered session log. Nothing touches the disk until `save_to_file`.
#[derive(Debug)]
pub struct ChessLogger {
    pub log_buffer: String,
    pub advanced_logging: bool,
    indent_level: usize,
    selection_count: u32,
}

impl ChessLogger {
    pub fn new() -> Self {
        let mut logger = Self {
            log_buffer: String::with_capacity(64 * 1024),
            advanced_logging: false,
            indent_level: 0,
            selection_count: 0,
        };

        logger.log("=== Chess Board Session Log Started ===");
        logger.log(&format!("Date: {}", chrono::Local::now().format("%m/%d/%Y %H:%M:%S")));
        logger
    }

    pub fn should_log_advanced(&self) -> bool {
        self.advanced_logging
    }

    pub fn enable_advanced_logging(&mut self) {
        self.advanced_logging = true;
        self.log("Advanced logging enabled - board dumps and full move lists active");
    }

    pub fn disable_advanced_logging(&mut self) {
        self.advanced_logging = false;
        self.log("Advanced logging disabled - basic mode active");
    }

    pub fn log(&mut self, message: &str) {
        self.log_buffer.push_str(message);
        self.log_buffer.push('\n');
    }

    pub fn log_with_indent(&mut self, message: &str) {
        let indent = "  ".repeat(self.indent_level);
        self.log_buffer.push_str(&format!("{}{}\n", indent, message));
    }

    pub fn increase_indent(&mut self) { self.indent_level += 1; }
    pub fn decrease_indent(&mut self) {
        if self.indent_level > 0 { self.indent_level -= 1; }
    }

    // SAFE SQUARES
    pub fn log_safe_squares(&mut self, board: &Board) {
        let safe_squares = board.safe_squares();
        let move_count: usize = safe_squares.values().map(Vec::len).sum();

        self.log(&format!(
            "{} to move | {} pieces can move | {} legal moves",
            board.player_color().name(),
            safe_squares.len(),
            move_count
        ));

        if board.is_in_check(board.player_color()) {
            self.log_check(board.player_color());
        }

        if self.should_log_advanced() {
            self.increase_indent();
            for line in board.debug_board().lines() {
                self.log_with_indent(line);
            }
            for line in board.debug_safe_squares() {
                self.log_with_indent(&line);
            }
            self.decrease_indent();
        }
    }

    pub fn log_check(&mut self, side: Side) {
        self.log(&format!("CHECK! {} king is under attack", side.name()));
    }

    // SELECTION
    pub fn log_selection(&mut self, square: Square, symbol: char, destinations: &[Square]) {
        self.selection_count += 1;
        let targets: Vec<String> = destinations.iter().map(Square::to_algebraic).collect();

        if targets.is_empty() {
            self.log(&format!(
                "{}. Selected {} on {} - no safe squares",
                self.selection_count,
                symbol,
                square.to_algebraic()
            ));
        } else {
            self.log(&format!(
                "{}. Selected {} on {} - safe squares: {}",
                self.selection_count,
                symbol,
                square.to_algebraic(),
                targets.join(" ")
            ));
        }
    }

    pub fn log_deselection(&mut self) {
        self.log_with_indent("Selection cleared");
    }

    pub fn log_move_request(&mut self, from: Square, to: Square) {
        self.log_with_indent(&format!(
            "Move {}-{} is legal (moves are not applied on this board)",
            from.to_algebraic(),
            to.to_algebraic()
        ));
    }

    pub fn log_session_end(&mut self, reason: &str) {
        self.log(&format!("Session finished - {}", reason));
    }

    /// Writes the buffer to `logs/<timestamp>.txt` and returns the file name.
    pub fn save_to_file(&mut self, reason: &str) -> Result<String, String> {
        self.save_to_dir(Path::new("logs"), reason)
    }

    pub fn save_to_dir(&mut self, dir: &Path, reason: &str) -> Result<String, String> {
        if let Err(e) = fs::create_dir_all(dir) {
            return Err(format!("Failed to create logs directory: {}", e));
        }

        let now = chrono::Local::now();
        let path = dir.join(format!("{}.txt", now.format("%m_%d_%Y_%H_%M_%S")));
        let filename = path.display().to_string();

        self.log(&format!("Session ended: {} - Saving log", reason));

        match File::create(&path) {
            Ok(mut file) => {
                if let Err(e) = file.write_all(self.log_buffer.as_bytes()) {
                    return Err(format!("Failed to write log file: {}", e));
                }
                Ok(filename)
            }
            Err(e) => Err(format!("Failed to create log file: {}", e)),
        }
    }
}

impl Default for ChessLogger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Piece;

    #[test]
    fn header_is_written_on_creation() {
        let logger = ChessLogger::new();
        assert!(logger.log_buffer.starts_with("=== Chess Board Session Log Started ===\n"));
        assert!(logger.log_buffer.contains("Date: "));
    }

    #[test]
    fn indentation_nests_and_never_underflows() {
        let mut logger = ChessLogger::new();
        logger.decrease_indent();
        logger.increase_indent();
        logger.increase_indent();
        logger.log_with_indent("deep");
        logger.decrease_indent();
        logger.decrease_indent();
        logger.decrease_indent();
        logger.log_with_indent("flat");

        assert!(logger.log_buffer.contains("\n    deep\n"));
        assert!(logger.log_buffer.ends_with("\nflat\n"));
    }

    #[test]
    fn safe_square_summary_mentions_check() {
        let board = Board::with_pieces(
            Side::White,
            &[
                (Square::new(0, 4), Piece::king(Side::White)),
                (Square::new(0, 0), Piece::rook(Side::Black)),
                (Square::new(7, 7), Piece::king(Side::Black)),
            ],
        );
        let mut logger = ChessLogger::new();
        logger.log_safe_squares(&board);

        assert!(logger.log_buffer.contains("White to move | 1 pieces can move | 3 legal moves"));
        assert!(logger.log_buffer.contains("CHECK! White king is under attack"));
        assert!(!logger.log_buffer.contains("a b c d e f g h"), "no board dump in basic mode");
    }

    #[test]
    fn advanced_mode_dumps_the_board() {
        let mut logger = ChessLogger::new();
        logger.enable_advanced_logging();
        logger.log_safe_squares(&Board::new());

        assert!(logger.log_buffer.contains("  8  r n b q k b n r\n"));
        assert!(logger.log_buffer.contains("  e2 P -> e3 e4\n"));
    }

    #[test]
    fn selections_are_numbered() {
        let mut logger = ChessLogger::new();
        logger.log_selection(Square::new(1, 4), 'P', &[Square::new(2, 4), Square::new(3, 4)]);
        logger.log_selection(Square::new(0, 4), 'K', &[]);

        assert!(logger.log_buffer.contains("1. Selected P on e2 - safe squares: e3 e4\n"));
        assert!(logger.log_buffer.contains("2. Selected K on e1 - no safe squares\n"));
    }

    #[test]
    fn save_writes_the_buffer() {
        let dir = std::env::temp_dir().join(format!("chess_logger_test_{}", std::process::id()));
        let mut logger = ChessLogger::new();
        logger.log("hello board");

        let filename = logger.save_to_dir(&dir, "test").expect("log should be written");
        let contents = fs::read_to_string(&filename).expect("log file should exist");

        assert!(contents.contains("hello board\n"));
        assert!(contents.ends_with("Session ended: test - Saving log\n"));
        let _ = fs::remove_dir_all(&dir);
    }
}
