//! HTTP surface for the telephony platform
//!
//! - POST /incoming - inbound call webhook; replies with the
//!   connect-stream document
//! - GET /connection - WebSocket upgrade for the call's media stream
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
