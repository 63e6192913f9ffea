use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::Method,
};
use serde_json::Value;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::{
        completion::Prompt,
        reply_parser,
    },
    state::SharedState,
};

/// Answer a question with the completion API and split off its references.
///
/// Every method is routed here so that a non-POST gets the JSON 405 body
/// rather than the router's empty one.
#[tracing::instrument(skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn get_response(
    method: Method,
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ChatResponse>, AppError> {
    if method != Method::POST {
        warn!(%method, "Invalid request method");
        return Err(AppError::InvalidMethod);
    }

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "Invalid JSON format in the request");
        AppError::MalformedInput
    })?;

    let Some(request) = ChatRequest::from_value(&payload) else {
        warn!("Empty 'message' field in the request");
        return Err(AppError::MissingField);
    };

    info!(message = %request.message, "Received user input");

    let prompt = Prompt::for_question(&request.message);
    let raw = state.completions.complete(&prompt).await.map_err(|e| {
        error!(error = %e, message = %request.message, "Completion API call failed");
        AppError::from(e)
    })?;

    let reply = raw.trim();
    info!(%reply, "Generated reply");

    let parsed = reply_parser::parse(reply);
    if parsed.has_marker && parsed.references.is_empty() {
        debug!("Reply has a references section but no usable entries");
    }

    Ok(Json(ChatResponse {
        response: parsed.answer,
        references: parsed.references,
    }))
}
