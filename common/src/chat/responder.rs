use std::future::Future;

use crate::identifiers::ChatId;
use super::view::BoardView;

/// Outbound half of the chat transport. The router never touches a
/// socket; whatever carries the conversation implements this and test
/// doubles record into it.
pub trait ChatResponder: Send + Sync + Clone + 'static {
    fn send_text(&self, chat_id: ChatId, text: String) -> impl Future<Output = ()> + Send;

    fn send_board(&self, chat_id: ChatId, view: BoardView) -> impl Future<Output = ()> + Send;
}
