// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{message::ChatResponse, services::generator::GenerateError};

/// User-facing failure categories of the chat relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Auth,
    Quota,
    Upstream,
    Unknown,
}

impl ErrorKind {
    pub fn status_code(self) -> StatusCode {
        match self {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Auth => StatusCode::UNAUTHORIZED,
            ErrorKind::Quota => StatusCode::TOO_MANY_REQUESTS,
            ErrorKind::Upstream => StatusCode::SERVICE_UNAVAILABLE,
            ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn public_message(self) -> &'static str {
        match self {
            ErrorKind::Validation => "Message is required. Send a message to the CHILL GUY.",
            ErrorKind::Auth => "Invalid API key. Please check your configuration.",
            ErrorKind::Quota => "API quota exceeded. Please try again later.",
            ErrorKind::Upstream => "Upstream server error. Please try again later.",
            ErrorKind::Unknown => "An unexpected error occurred.",
        }
    }
}

/// Infer the failure category from an error's text. First match wins.
pub fn classify(error_text: &str) -> ErrorKind {
    let has = |needle: &str| error_text.contains(needle);

    if has("401") || has("API key") {
        ErrorKind::Auth
    } else if has("429") || has("quota") {
        ErrorKind::Quota
    } else if has("500") || has("503") {
        ErrorKind::Upstream
    } else {
        ErrorKind::Unknown
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("message is missing or empty")]
    MissingMessage,

    #[error("generation failed: {0}")]
    Generation(#[from] GenerateError),
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::MissingMessage => ErrorKind::Validation,
            AppError::Generation(err) => classify(&err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        (
            kind.status_code(),
            Json(ChatResponse::failure(kind.public_message())),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_auth_failures() {
        assert_eq!(classify("[401 Unauthorized] bad credentials"), ErrorKind::Auth);
        assert_eq!(
            classify("[400 Bad Request] API key not valid. Please pass a valid API key."),
            ErrorKind::Auth
        );
    }

    #[test]
    fn classifies_quota_failures() {
        assert_eq!(classify("[429 Too Many Requests] slow down"), ErrorKind::Quota);
        assert_eq!(classify("you exceeded your current quota"), ErrorKind::Quota);
    }

    #[test]
    fn classifies_upstream_failures() {
        assert_eq!(classify("[500 Internal Server Error] boom"), ErrorKind::Upstream);
        assert_eq!(classify("[503 Service Unavailable] overloaded"), ErrorKind::Upstream);
    }

    #[test]
    fn unknown_when_nothing_matches() {
        assert_eq!(classify("connection reset by peer"), ErrorKind::Unknown);
        assert_eq!(classify(""), ErrorKind::Unknown);
        // Matching is case-sensitive.
        assert_eq!(classify("api key rejected"), ErrorKind::Unknown);
        assert_eq!(classify("Quota exceeded"), ErrorKind::Unknown);
    }

    #[test]
    fn earlier_rules_win() {
        assert_eq!(classify("429 but also API key"), ErrorKind::Auth);
        assert_eq!(classify("quota hit after 503"), ErrorKind::Quota);
        assert_eq!(classify("401 then 500"), ErrorKind::Auth);
    }

    #[test]
    fn generation_errors_are_classified_by_their_text() {
        let err = AppError::from(GenerateError::MissingApiKey);
        assert_eq!(err.kind(), ErrorKind::Auth);

        let err = AppError::from(GenerateError::Api {
            status: StatusCode::SERVICE_UNAVAILABLE,
            message: "The model is overloaded.".to_string(),
        });
        assert_eq!(err.kind(), ErrorKind::Upstream);

        assert_eq!(AppError::from(GenerateError::Empty).kind(), ErrorKind::Unknown);
        assert_eq!(AppError::MissingMessage.kind(), ErrorKind::Validation);
    }
}
