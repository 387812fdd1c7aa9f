use super::board::{Board, BOARD_SIZE, is_full};
use super::types::{GameStatus, Mark};

/// Scans all 8 winning lines (3 rows, 3 columns, 2 diagonals) and returns
/// the mark holding a completed line, if any.
pub fn check_win(board: &Board) -> Option<Mark> {
    check_rows(board)
        .or_else(|| check_columns(board))
        .or_else(|| check_diagonals(board))
}

/// Terminal classification of a board. A completed line wins even on a
/// fully-filled board: the win check runs before the draw check.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_win(board) {
        return match winner {
            Mark::X => GameStatus::XWon,
            Mark::O => GameStatus::OWon,
            Mark::Empty => unreachable!(),
        };
    }

    if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

fn check_rows(board: &Board) -> Option<Mark> {
    for row in board {
        if row[0] != Mark::Empty && row[0] == row[1] && row[1] == row[2] {
            return Some(row[0]);
        }
    }
    None
}

fn check_columns(board: &Board) -> Option<Mark> {
    for col in 0..BOARD_SIZE {
        let mark = board[0][col];
        if mark != Mark::Empty && mark == board[1][col] && mark == board[2][col] {
            return Some(mark);
        }
    }
    None
}

fn check_diagonals(board: &Board) -> Option<Mark> {
    let center = board[1][1];
    if center == Mark::Empty {
        return None;
    }

    if board[0][0] == center && center == board[2][2] {
        return Some(center);
    }
    if board[0][2] == center && center == board[2][0] {
        return Some(center);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::board::empty_board;

    fn board_from_rows(rows: [[char; 3]; 3]) -> Board {
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
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&empty_board()), GameStatus::InProgress);
        assert_eq!(check_win(&empty_board()), None);
    }

    #[test]
    fn test_row_win() {
        let board = board_from_rows([['X', 'X', 'X'], ['O', 'O', ' '], [' ', ' ', ' ']]);
        assert_eq!(check_win(&board), Some(Mark::X));
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_column_win() {
        let board = board_from_rows([['O', 'X', ' '], ['O', 'X', ' '], ['O', ' ', 'X']]);
        assert_eq!(check_win(&board), Some(Mark::O));
        assert_eq!(evaluate(&board), GameStatus::OWon);
    }

    #[test]
    fn test_main_diagonal_win() {
        let board = board_from_rows([['X', 'O', ' '], ['O', 'X', ' '], [' ', ' ', 'X']]);
        assert_eq!(check_win(&board), Some(Mark::X));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from_rows([['X', 'X', 'O'], [' ', 'O', ' '], ['O', ' ', ' ']]);
        assert_eq!(check_win(&board), Some(Mark::O));
    }

    #[test]
    fn test_drawn_board() {
        // X O X / X O O / O X X
        let board = board_from_rows([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']]);
        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_takes_precedence_over_draw_on_full_board() {
        // Full board, X completed the left column.
        let board = board_from_rows([['X', 'O', 'O'], ['X', 'X', 'O'], ['X', 'O', 'X']]);
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), GameStatus::XWon);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = board_from_rows([['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']]);
        assert_eq!(evaluate(&board), evaluate(&board));
    }
}
