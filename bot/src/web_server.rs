use std::future::Future;

use axum::{
    Router,
    extract::{State, WebSocketUpgrade},
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use common::log;

use crate::session_router::SessionRouter;
use crate::session_store::SessionStore;
use crate::ws_handler::handle_websocket;

#[derive(Clone)]
pub struct WebServerState {
    pub router: SessionRouter,
    pub sessions: SessionStore,
}

pub async fn run_web_server(
    listen_address: &str,
    router: SessionRouter,
    sessions: SessionStore,
    shutdown: impl Future<Output = ()> + Send + 'static,
) {
    let state = WebServerState { router, sessions };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/ws", get(ws_upgrade_handler))
        .layer(cors)
        .with_state(state);

    log!("Chat endpoint listening on {}", listen_address);

    let listener = tokio::net::TcpListener::bind(listen_address)
        .await
        .expect("Failed to bind web server address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .expect("Web server error");
}

async fn ws_upgrade_handler(
    ws: WebSocketUpgrade,
    State(state): State<WebServerState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}
