use axum::{Json, extract::rejection::JsonRejection, http::StatusCode};
use thiserror::Error;

use super::{
    callable_error_response_resource::{CallableErrorBodyResource, CallableErrorResponseResource},
    functions_error_code::FunctionsErrorCode,
};

pub type CallableRejection = (StatusCode, Json<CallableErrorResponseResource>);

/// Typed failure raised from a callable handler. Rendered to the caller as
/// `{ "error": { "status", "message" } }`.
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct CallableError {
    code: FunctionsErrorCode,
    message: String,
}

impl CallableError {
    pub fn new(code: FunctionsErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(FunctionsErrorCode::InvalidArgument, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(FunctionsErrorCode::Internal, message)
    }

    pub fn into_rejection(self) -> CallableRejection {
        (
            self.code.http_status(),
            Json(CallableErrorResponseResource {
                error: CallableErrorBodyResource {
                    status: self.code.canonical_name().to_string(),
                    message: self.message,
                },
            }),
        )
    }
}

impl From<JsonRejection> for CallableError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!(error = %rejection.body_text(), "invalid callable request body");
        Self::invalid_argument("Bad Request")
    }
}
