// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{any, get},
};
use chat::get_response;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", any(get_response))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
