use super::state::AppState;
use crate::relay;
use crate::twiml;
use axum::{
    extract::{State, WebSocketUpgrade},
    http::{header, StatusCode},
    response::IntoResponse,
};
use tracing::{error, info};

/// POST /incoming
/// Inbound call webhook: instruct the platform to open the media stream.
/// Consumes no request fields.
pub async fn incoming_call(State(state): State<AppState>) -> impl IntoResponse {
    info!("Inbound call webhook received");

    let body = twiml::connect_stream(&state.config.stream.host);

    (StatusCode::OK, [(header::CONTENT_TYPE, "text/xml")], body)
}

/// GET /connection
/// Upgrade to the bidirectional media stream and relay it until the call
/// ends. Engine creation failure ends the call's pipeline; the process and
/// other sessions are unaffected.
pub async fn connection(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| async move {
        match state.engines.create().await {
            Ok((transcriber, synthesizer)) => {
                relay::run_connection(socket, transcriber, synthesizer).await;
            }
            Err(e) => {
                error!("Failed to create speech engines: {:#}", e);
            }
        }
    })
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
