use super::board::{Board, BOARD_SIZE, empty_board};
use super::error::InvalidMove;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::evaluate;

/// One game of tic-tac-toe. X always moves first; turns strictly
/// alternate. Once `status` is terminal the state accepts no further
/// moves until the caller discards it and starts a fresh game.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_mark: Mark,
    status: GameStatus,
    last_move: Option<Position>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Applies one move. Validation happens before any mutation, so a
    /// rejected move leaves the state exactly as it was. The caller must
    /// pass the mark it is playing; a mark that does not match the
    /// current turn is rejected rather than trusted.
    pub fn place_mark(&mut self, row: usize, col: usize, mark: Mark) -> Result<(), InvalidMove> {
        if self.status != GameStatus::InProgress {
            return Err(InvalidMove::GameOver);
        }

        if mark != self.current_mark {
            return Err(InvalidMove::NotYourTurn);
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(InvalidMove::OutOfBounds { row, col });
        }

        if self.board[row][col] != Mark::Empty {
            return Err(InvalidMove::CellOccupied);
        }

        self.board[row][col] = mark;
        self.last_move = Some(Position::new(row, col));
        self.status = evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => unreachable!(),
        };
    }

    #[cfg(test)]
    pub fn from_rows(rows: [[char; 3]; 3], current_mark: Mark) -> Self {
        let mut board = empty_board();
        for (r, row) in rows.iter().enumerate() {
            for (c, &ch) in row.iter().enumerate() {
                board[r][c] = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => Mark::Empty,
                };
            }
        }

        Self {
            status: evaluate(&board),
            board,
            current_mark,
            last_move: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
