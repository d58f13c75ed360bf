use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use maljut_core::AssistantError;
use serde::Serialize;
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Failures surfaced by the endpoint handlers.
///
/// Every variant renders as the uniform `{success:false, error, message?}`
/// envelope so clients can branch on the `success` flag alone.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing request data
    #[error("{0}")]
    BadRequest(String),

    /// Message rejected by the content policy
    #[error("Consulta no permitida")]
    PolicyRejected,

    /// Translated failure from the assistant gateway
    #[error(transparent)]
    Assistant(#[from] AssistantError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(detail) => (StatusCode::BAD_REQUEST, detail, None),
            ApiError::PolicyRejected => (
                StatusCode::BAD_REQUEST,
                "Consulta no permitida".to_string(),
                None,
            ),
            ApiError::Assistant(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_ERROR_MESSAGE.to_string(),
                Some(err.to_string()),
            ),
        };

        let body = ErrorBody {
            success: false,
            error,
            message,
        };

        (status, Json(body)).into_response()
    }
}
