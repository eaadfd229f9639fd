//! Error responses for authentication faults.
//!
//! Bad credentials never reach this code: they resolve to an anonymous
//! principal. Only provider faults and missing context are rendered here.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AuthError;

/// JSON body of an authentication error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub error_description: String,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, body) = error_details(&self);
        (status, Json(body)).into_response()
    }
}

/// Maps an error to a body safe to show to callers.
///
/// Every variant is a server fault. Provider and storage messages stay in
/// the logs.
fn error_details(error: &AuthError) -> (StatusCode, ErrorBody) {
    let description = match error {
        AuthError::Provider { provider, .. } => {
            format!("The {provider} authentication provider is unavailable")
        }
        AuthError::Storage { .. } => "Credential storage is unavailable".to_string(),
        AuthError::Configuration { .. } => "Authentication is misconfigured".to_string(),
        AuthError::MissingContext { what } => format!("{what} was not resolved for this request"),
        AuthError::Internal { .. } => "Internal authentication error".to_string(),
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorBody {
            error: "server_error",
            error_description: description,
        },
    )
}
