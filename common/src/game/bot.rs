use super::board::{Board, available_moves};
use super::game_state::GameState;
use super::types::{GameStatus, Mark, Position};
use super::win_detector::evaluate;

/// Picks the optimal move for the side to move via exhaustive minimax.
///
/// Returns `None` on a terminal or full board; callers are expected to
/// check terminality first, so `None` signals caller misuse rather than
/// a normal game situation.
///
/// Among equally-scored candidates the first one in row-major scan order
/// wins (strictly-greater comparison). Scores carry no depth component:
/// a win in two plies and a win in six are both worth 1, so the search
/// does not prefer faster wins. Both behaviors are fixed; tests depend
/// on them.
pub fn choose_move(state: &GameState) -> Option<Position> {
    if state.status() != GameStatus::InProgress {
        return None;
    }

    let bot_mark = state.current_mark();
    let opponent = bot_mark.opponent()?;

    let mut board = *state.board();
    let moves = available_moves(&board);
    if moves.is_empty() {
        return None;
    }

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in moves {
        board[pos.row][pos.col] = bot_mark;
        let score = minimax(&mut board, bot_mark, opponent, false);
        board[pos.row][pos.col] = Mark::Empty;

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

/// Value of `board` for `bot_mark`, assuming optimal play from both
/// sides: 1 if the bot forces a win, -1 if the opponent does, 0 for a
/// draw. The full remaining tree is explored; at most 9 plies, so no
/// pruning is needed.
fn minimax(board: &mut Board, bot_mark: Mark, opponent: Mark, maximizing: bool) -> i32 {
    let status = evaluate(board);
    if let Some(winner) = status.winner() {
        return if winner == bot_mark { 1 } else { -1 };
    }
    if status == GameStatus::Draw {
        return 0;
    }

    let mark = if maximizing { bot_mark } else { opponent };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in available_moves(board) {
        board[pos.row][pos.col] = mark;
        let score = minimax(board, bot_mark, opponent, !maximizing);
        board[pos.row][pos.col] = Mark::Empty;

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_deterministic() {
        let state = GameState::new();
        let first = choose_move(&state).unwrap();
        let second = choose_move(&state).unwrap();
        assert_eq!(first, second);
        // All nine openings draw under optimal play, so the row-major
        // tie-break picks the top-left corner.
        assert_eq!(first, Position::new(0, 0));
    }

    #[test]
    fn test_corner_reply_to_center_opening() {
        let mut state = GameState::new();
        state.place_mark(1, 1, Mark::X).unwrap();

        let reply = choose_move(&state).unwrap();
        assert_eq!(reply, Position::new(0, 0));

        // Edge replies to a center opening lose; the choice must be a
        // corner no matter how the tie-break evolves.
        let edges = [
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(1, 2),
            Position::new(2, 1),
        ];
        assert!(!edges.contains(&reply));
    }

    #[test]
    fn test_forced_move_row_scan_order() {
        // X X _ / O O _ / _ _ _, O to move. Both (0, 2) and (1, 2) force
        // a win for O; the scan order settles on (0, 2).
        let state = GameState::from_rows(
            [['X', 'X', ' '], ['O', 'O', ' '], [' ', ' ', ' ']],
            Mark::O,
        );
        assert_eq!(choose_move(&state), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_bot_blocks_immediate_threat() {
        // X threatens (0, 2); O has no win of its own and must block.
        let state = GameState::from_rows(
            [['X', 'X', ' '], [' ', 'O', ' '], [' ', ' ', ' ']],
            Mark::O,
        );
        assert_eq!(choose_move(&state), Some(Position::new(0, 2)));
    }

    #[test]
    fn test_bot_takes_immediate_win_over_block() {
        // X threatens (0, 2), O can win outright at (1, 2). The block
        // scores a draw, the win scores 1, so the later cell overtakes
        // the earlier one in the scan.
        let state = GameState::from_rows(
            [['X', 'X', ' '], ['O', 'O', ' '], ['X', ' ', ' ']],
            Mark::O,
        );
        assert_eq!(choose_move(&state), Some(Position::new(1, 2)));
    }

    #[test]
    fn test_no_move_on_terminal_state() {
        let won = GameState::from_rows(
            [['X', 'X', 'X'], ['O', 'O', ' '], [' ', ' ', ' ']],
            Mark::O,
        );
        assert_eq!(choose_move(&won), None);

        let drawn = GameState::from_rows(
            [['X', 'O', 'X'], ['X', 'O', 'O'], ['O', 'X', 'X']],
            Mark::X,
        );
        assert_eq!(choose_move(&drawn), None);
    }

    #[test]
    fn test_optimal_self_play_draws() {
        let mut state = GameState::new();
        let mut plies = 0;

        while state.status() == GameStatus::InProgress {
            let pos = choose_move(&state).expect("in-progress game must have a move");
            state.place_mark(pos.row, pos.col, state.current_mark()).unwrap();
            plies += 1;
            assert!(plies <= 9);
        }

        assert_eq!(state.status(), GameStatus::Draw);
        assert_eq!(plies, 9);
    }
}
