use axum::{extract::Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use std::fmt;
use validator::ValidationError;

/// Every rejection a route can produce. This is the single place where a failed
/// request is turned into an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required field is missing or malformed.
    Validation(String),
    /// The route id does not resolve to a record.
    NotFound(String),
    /// The request is well formed but breaks a business rule.
    Conflict(String),
    MethodNotAllowed(String),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation(message)
            | Self::NotFound(message)
            | Self::Conflict(message)
            | Self::MethodNotAllowed(message) => message,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message(), self.status())
    }
}

impl std::error::Error for Error {}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        let message = error
            .message
            .map(|message| message.into_owned())
            .unwrap_or_else(|| error.code.into_owned());

        Self::Validation(message)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}
