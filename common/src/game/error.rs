use thiserror::Error;

/// Rejection returned by `GameState::place_mark`. Every variant is
/// recoverable: the caller re-prompts and the state is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    #[error("position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell is already marked")]
    CellOccupied,

    #[error("not this player's turn")]
    NotYourTurn,

    #[error("game is already over")]
    GameOver,
}
