use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use common::game::GameState;
use common::{log, ChatId};

pub type SharedGameState = Arc<Mutex<GameState>>;

/// Maps a chat to its one live game. The outer lock only guards the map
/// itself; each game sits behind its own mutex, which the router holds
/// for the whole human-move/computer-move sequence so per-chat mutation
/// stays serialized without any cross-chat lock.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<ChatId, SharedGameState>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Starts a fresh game for the chat, replacing any game already in
    /// progress there.
    pub async fn insert(&self, chat_id: ChatId) -> SharedGameState {
        let game = Arc::new(Mutex::new(GameState::new()));
        let mut sessions = self.sessions.lock().await;
        if sessions.insert(chat_id, game.clone()).is_some() {
            log!("Chat {}: replaced an unfinished game", chat_id);
        }
        game
    }

    pub async fn lookup(&self, chat_id: ChatId) -> Option<SharedGameState> {
        self.sessions.lock().await.get(&chat_id).cloned()
    }

    pub async fn remove(&self, chat_id: ChatId) {
        if self.sessions.lock().await.remove(&chat_id).is_some() {
            log!("Chat {}: game session removed", chat_id);
        }
    }
}
