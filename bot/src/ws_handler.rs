use std::future::Future;
use std::sync::atomic::{AtomicI64, Ordering};

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use common::chat::{BoardView, ChatCommand, ChatResponder};
use common::{log, ChatId};

use crate::web_server::WebServerState;

static NEXT_CHAT_ID: AtomicI64 = AtomicI64::new(1);

/// One inbound frame: the callback data a keyboard button (or a typed
/// command) carries, e.g. `{"data": "/move 1 2"}`.
#[derive(Debug, Deserialize)]
struct InboundEnvelope {
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum OutboundEnvelope {
    Text { text: String },
    Board { view: BoardView },
}

#[derive(Clone)]
struct WsResponder {
    tx: mpsc::Sender<OutboundEnvelope>,
}

impl WsResponder {
    async fn send(&self, chat_id: ChatId, envelope: OutboundEnvelope) {
        if self.tx.send(envelope).await.is_err() {
            log!("Chat {}: outbound channel closed", chat_id);
        }
    }
}

impl ChatResponder for WsResponder {
    fn send_text(&self, chat_id: ChatId, text: String) -> impl Future<Output = ()> + Send {
        self.send(chat_id, OutboundEnvelope::Text { text })
    }

    fn send_board(&self, chat_id: ChatId, view: BoardView) -> impl Future<Output = ()> + Send {
        self.send(chat_id, OutboundEnvelope::Board { view })
    }
}

/// One WebSocket connection is one chat: it gets a fresh chat id, its
/// frames are parsed into commands for the session router, and its game
/// is dropped when the connection goes away.
pub async fn handle_websocket(socket: WebSocket, state: WebServerState) {
    let (mut ws_sender, mut ws_receiver) = socket.split();

    let (tx, mut rx) = mpsc::channel::<OutboundEnvelope>(32);

    let send_task = tokio::spawn(async move {
        while let Some(envelope) = rx.recv().await {
            match serde_json::to_string(&envelope) {
                Ok(json) => {
                    if ws_sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(e) => log!("Failed to encode outbound message: {}", e),
            }
        }
    });

    let chat_id = ChatId::new(NEXT_CHAT_ID.fetch_add(1, Ordering::Relaxed));
    let responder = WsResponder { tx };
    log!("Chat {} connected", chat_id);

    while let Some(result) = ws_receiver.next().await {
        match result {
            Ok(Message::Text(raw)) => {
                let envelope: InboundEnvelope = match serde_json::from_str(&raw) {
                    Ok(m) => m,
                    Err(e) => {
                        log!("Chat {}: failed to decode frame: {}", chat_id, e);
                        continue;
                    }
                };

                match ChatCommand::parse(&envelope.data) {
                    Ok(command) => {
                        state
                            .router
                            .handle_command(chat_id, command, &responder)
                            .await;
                    }
                    Err(e) => {
                        log!("Chat {}: {}", chat_id, e);
                        responder
                            .send_text(chat_id, "Invalid move format.".to_string())
                            .await;
                    }
                }
            }
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => {
                log!("Chat {}: websocket error: {}", chat_id, e);
                break;
            }
        }
    }

    log!("Chat {} disconnected", chat_id);
    state.sessions.remove(chat_id).await;
    send_task.abort();
}
