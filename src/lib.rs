pub mod board;
pub mod book;
pub mod session;
pub mod sync;
pub mod tt;

pub use board::{Color, Move, Piece, Position, Square};
pub use book::OpeningBook;
pub use session::GameSession;
pub use tt::TranspositionTable;
