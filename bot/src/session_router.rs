use common::chat::{BoardView, ChatCommand, ChatResponder};
use common::game::{choose_move, Mark};
use common::{log, ChatId};

use crate::session_store::SessionStore;

const NO_GAME_PROMPT: &str = "Start a game first with /play.";
const RETRY_PROMPT: &str = "Invalid move. Try another cell.";

/// Dispatches parsed chat commands onto game sessions. The human always
/// plays X; the computer answers with O picked by the move search. One
/// command is handled at a time per chat because the session mutex is
/// held across the whole human-move/computer-move sequence.
#[derive(Clone)]
pub struct SessionRouter {
    store: SessionStore,
    greeting: String,
}

impl SessionRouter {
    pub fn new(store: SessionStore, greeting: String) -> Self {
        Self { store, greeting }
    }

    pub async fn handle_command<R: ChatResponder>(
        &self,
        chat_id: ChatId,
        command: ChatCommand,
        responder: &R,
    ) {
        match command {
            ChatCommand::Start => {
                responder.send_text(chat_id, self.greeting.clone()).await;
            }
            ChatCommand::Play => {
                let session = self.store.insert(chat_id).await;
                let state = session.lock().await;
                log!("Chat {}: new game started", chat_id);
                responder
                    .send_board(chat_id, BoardView::from_state(&state))
                    .await;
            }
            ChatCommand::Move { row, col } => {
                self.handle_move(chat_id, row, col, responder).await;
            }
            ChatCommand::Ignore => {}
        }
    }

    async fn handle_move<R: ChatResponder>(
        &self,
        chat_id: ChatId,
        row: usize,
        col: usize,
        responder: &R,
    ) {
        let Some(session) = self.store.lookup(chat_id).await else {
            responder.send_text(chat_id, NO_GAME_PROMPT.to_string()).await;
            return;
        };

        let mut state = session.lock().await;

        if let Err(err) = state.place_mark(row, col, Mark::X) {
            log!("Chat {}: rejected move ({}, {}): {}", chat_id, row, col, err);
            responder.send_text(chat_id, RETRY_PROMPT.to_string()).await;
            return;
        }

        if state.status().is_terminal() {
            responder
                .send_board(chat_id, BoardView::from_state(&state))
                .await;
            drop(state);
            self.store.remove(chat_id).await;
            return;
        }

        let snapshot = state.clone();
        match tokio::task::spawn_blocking(move || choose_move(&snapshot)).await {
            Ok(Some(pos)) => match state.place_mark(pos.row, pos.col, Mark::O) {
                Ok(()) => log!("Chat {}: computer played {}", chat_id, pos),
                Err(err) => log!("Chat {}: computer move failed: {}", chat_id, err),
            },
            Ok(None) => {
                // choose_move only yields None on terminal boards, which
                // were handled above.
                log!("Chat {}: move search returned nothing for a live board", chat_id);
            }
            Err(err) => log!("Chat {}: move search task failed: {}", chat_id, err),
        }

        responder
            .send_board(chat_id, BoardView::from_state(&state))
            .await;

        if state.status().is_terminal() {
            drop(state);
            self.store.remove(chat_id).await;
        }
    }
}
