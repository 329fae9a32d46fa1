use egui::{Color32, Rect, Sense, Vec2};
use engine::{Board, ChessLogger, Square};

use crate::config::ViewerConfig;
use crate::selection::{ClickOutcome, Selection};

pub struct ChessApp {
    board: Board,
    selection: Selection,
    logger: ChessLogger,
    config: ViewerConfig,
}

impl ChessApp {
    pub fn new(config: ViewerConfig) -> Self {
        let board = Board::new();
        let mut logger = ChessLogger::new();
        if config.advanced_logging {
            logger.enable_advanced_logging();
        }
        logger.log_safe_squares(&board);

        Self {
            board,
            selection: Selection::new(),
            logger,
            config,
        }
    }
}

impl eframe::App for ChessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.status_line());

            let available_size = ui.available_size();
            let board_size = available_size.x.min(available_size.y) - 20.0;
            let square_size = board_size / 8.0;

            let board_rect = Rect::from_min_size(
                ui.cursor().min,
                Vec2::splat(board_size),
            );

            let response = ui.allocate_rect(board_rect, Sense::click());

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let relative_pos = pos - board_rect.min;
                    if let Some(clicked_square) = Square::from_coords(
                        relative_pos.x,
                        relative_pos.y,
                        square_size,
                    ) {
                        self.handle_square_click(clicked_square);
                    }
                }
            }

            self.draw_board(ui, board_rect, square_size);
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.logger.log_session_end("window closed");
        match self.logger.save_to_file("window closed") {
            Ok(filename) => println!("Session log saved to {}", filename),
            Err(e) => eprintln!("Could not save session log: {}", e),
        }
    }
}

impl ChessApp {
    fn status_line(&self) -> String {
        let side = self.board.player_color();
        if self.board.is_in_check(side) {
            format!("{} to move - CHECK", side.name())
        } else {
            format!("{} to move", side.name())
        }
    }

    fn handle_square_click(&mut self, clicked_square: Square) {
        match self.selection.handle_click(&self.board, clicked_square) {
            ClickOutcome::Selected { square, symbol } => {
                self.logger
                    .log_selection(square, symbol, self.selection.piece_safe_squares());
            }
            ClickOutcome::Cleared => self.logger.log_deselection(),
            ClickOutcome::MoveRequested { from, to } => self.logger.log_move_request(from, to),
            ClickOutcome::Ignored => {}
        }
    }

    fn draw_board(&self, ui: &mut egui::Ui, board_rect: Rect, square_size: f32) {
        let painter = ui.painter();
        let view = self.board.chessboard_view();

        for square in Square::all() {
            let (row, col) = (square.row(), square.col());

            let square_rect = Rect::from_min_size(
                board_rect.min + Vec2::new(col as f32 * square_size, (7 - row) as f32 * square_size),
                Vec2::splat(square_size),
            );

            let base_color = self.config.square_color(Board::is_square_dark(row, col));

            let square_color = if self.selection.is_square_selected(square) {
                self.config.selected_square
            } else {
                base_color
            };

            painter.rect_filled(square_rect, 0.0, square_color);

            let symbol = view[row as usize][col as usize];

            // Dot for a quiet destination, ring for a capture
            if self.selection.is_square_safe_for_selected_piece(square) {
                let center = square_rect.center();

                if symbol.is_some() {
                    painter.circle_filled(center, square_size * 0.4, self.config.hint_color);
                    painter.circle_filled(center, square_size * 0.25, square_color);
                } else {
                    painter.circle_filled(center, square_size * 0.15, self.config.hint_color);
                }
            }

            if let Some(symbol) = symbol {
                self.draw_piece(painter, symbol, square_rect);
            }
        }

        painter.rect_stroke(board_rect, 0.0, egui::Stroke::new(2.0, Color32::BLACK));
    }

    fn draw_piece(&self, painter: &egui::Painter, symbol: char, square_rect: Rect) {
        let size = square_rect.size() * 0.8;

        painter.text(
            square_rect.center(),
            egui::Align2::CENTER_CENTER,
            piece_glyph(symbol),
            egui::FontId::proportional(size.x),
            Color32::BLACK,
        );
    }
}

fn piece_glyph(symbol: char) -> &'static str {
    match symbol {
        'K' => "♔",
        'Q' => "♕",
        'R' => "♖",
        'B' => "♗",
        'N' => "♘",
        'P' => "♙",
        'k' => "♚",
        'q' => "♛",
        'r' => "♜",
        'b' => "♝",
        'n' => "♞",
        'p' => "♟",
        _ => "?",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_board_symbol_has_a_glyph() {
        let view = Board::new().chessboard_view();
        for row in view.iter() {
            for symbol in row.iter().flatten() {
                assert_ne!(piece_glyph(*symbol), "?", "missing glyph for {}", symbol);
            }
        }
    }

    #[test]
    fn clicks_are_logged() {
        let mut app = ChessApp::new(ViewerConfig::default());
        app.handle_square_click(Square::new(1, 4));
        app.handle_square_click(Square::new(3, 4));
        app.handle_square_click(Square::new(1, 4));

        let log = &app.logger.log_buffer;
        assert!(log.contains("1. Selected P on e2 - safe squares: e3 e4"));
        assert!(log.contains("Move e2-e4 is legal"));
        assert!(log.contains("Selection cleared"));
        assert_eq!(app.status_line(), "White to move");
    }
}
