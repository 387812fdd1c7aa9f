mod board;
mod bot;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, BOARD_SIZE, available_moves, empty_board, is_full};
pub use bot::choose_move;
pub use error::InvalidMove;
pub use game_state::GameState;
pub use types::{GameStatus, Mark, Position};
pub use win_detector::{check_win, evaluate};
