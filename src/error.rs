// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::message::ErrorBody;
use crate::services::completion::CompletionError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid request method. Only POST requests are allowed.")]
    InvalidMethod,

    #[error("Invalid JSON format")]
    MalformedInput,

    #[error("Message field is required")]
    MissingField,

    #[error("Invalid API key. Please check your configuration.")]
    Authentication,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("OpenAI API error: {0}")]
    ExternalApi(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidMethod => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MalformedInput | AppError::MissingField => StatusCode::BAD_REQUEST,
            AppError::Authentication => StatusCode::UNAUTHORIZED,
            AppError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AppError::ExternalApi(_) | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<CompletionError> for AppError {
    fn from(err: CompletionError) -> Self {
        match err {
            CompletionError::Authentication(_) => AppError::Authentication,
            CompletionError::RateLimited(_) => AppError::RateLimited,
            CompletionError::Api(msg) => AppError::ExternalApi(msg),
            CompletionError::MalformedResponse(msg) => AppError::Unexpected(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_errors_map_to_statuses() {
        let cases = [
            (CompletionError::Authentication("bad key".into()), StatusCode::UNAUTHORIZED),
            (CompletionError::RateLimited("slow down".into()), StatusCode::TOO_MANY_REQUESTS),
            (CompletionError::Api("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (CompletionError::MalformedResponse("empty".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn external_messages_keep_detail() {
        let err = AppError::from(CompletionError::Api("model overloaded".into()));
        assert_eq!(err.to_string(), "OpenAI API error: model overloaded");

        let err = AppError::from(CompletionError::MalformedResponse("no choices".into()));
        assert_eq!(err.to_string(), "Unexpected error: no choices");
    }
}
