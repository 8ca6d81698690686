//! Callable-function wire protocol.
//!
//! Requests arrive as `{"data": ...}`, results leave as `{"result": ...}`
//! and failures as `{"error": {"status": ..., "message": ...}}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

pub const INTERNAL_MESSAGE: &str = "Failed to generate text.";

#[derive(Debug, Deserialize)]
pub struct CallableRequest<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct CallableResponse<T> {
    pub result: T,
}

/// Errors a caller can observe. Anything richer stays in the server log.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallableError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{}", INTERNAL_MESSAGE)]
    Internal,
}

impl CallableError {
    /// Canonical code name, e.g. `invalid-argument`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "invalid-argument",
            Self::Internal => "internal",
        }
    }

    fn status(&self) -> &'static str {
        match self {
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Internal => "INTERNAL",
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "status": self.status(),
                "message": self.to_string(),
            }
        });
        (self.http_status(), Json(body)).into_response()
    }
}
