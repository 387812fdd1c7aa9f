use serde::Serialize;

use crate::game::{available_moves, GameState, GameStatus, Mark, Position};

/// The cells a player may legally mark: exactly the empty cells while
/// the game is in progress, nothing once it is terminal.
pub fn legal_moves(state: &GameState) -> Vec<Position> {
    if state.status() != GameStatus::InProgress {
        return Vec::new();
    }
    available_moves(state.board())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellButton {
    pub text: String,
    pub callback_data: String,
}

impl CellButton {
    fn new(text: &str, callback_data: &str) -> Self {
        Self {
            text: text.to_string(),
            callback_data: callback_data.to_string(),
        }
    }
}

/// A chat-renderable snapshot of a game: a status line and a button
/// grid. Empty cells carry a `/move` callback while the game runs;
/// occupied cells and finished boards get inert `ignore` buttons, and a
/// finished board gains a "Play Again" row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub text: String,
    pub buttons: Vec<Vec<CellButton>>,
}

impl BoardView {
    pub fn from_state(state: &GameState) -> Self {
        let game_over = state.status().is_terminal();
        let mut buttons = Vec::with_capacity(4);

        for (row, cells) in state.board().iter().enumerate() {
            let mut button_row = Vec::with_capacity(cells.len());
            for (col, &mark) in cells.iter().enumerate() {
                let text = cell_label(mark);
                if mark == Mark::Empty && !game_over {
                    let data = format!("/move {} {}", row, col);
                    button_row.push(CellButton::new(text, &data));
                } else {
                    button_row.push(CellButton::new(text, "ignore"));
                }
            }
            buttons.push(button_row);
        }

        if game_over {
            buttons.push(vec![CellButton::new("Play Again", "/play")]);
        }

        Self {
            text: status_line(state.status()),
            buttons,
        }
    }
}

fn cell_label(mark: Mark) -> &'static str {
    match mark {
        Mark::Empty => "⬛️",
        Mark::X => "❌",
        Mark::O => "⭕️",
    }
}

fn status_line(status: GameStatus) -> String {
    if let Some(winner) = status.winner() {
        return format!("Game over. Winner: {}", winner);
    }
    match status {
        GameStatus::Draw => "Game over. Draw".to_string(),
        _ => "Your move!".to_string(),
    }
}
