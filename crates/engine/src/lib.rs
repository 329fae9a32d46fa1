pub mod board;
pub mod types;
pub mod piece;
pub mod mobility;
pub mod logger;

pub use board::*;
pub use types::*;
pub use piece::*;
pub use mobility::*;
pub use logger::ChessLogger;
