use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::Json,
    routing::post,
    Router,
};
use maljut_core::validation::is_query_allowed;
use serde_json::Value;

use crate::{
    dto::{timestamp, ChatData, ChatRequest, Envelope},
    error::ApiError,
    service::MaljutService,
};

/// Create chat router
pub fn create_router() -> Router {
    Router::new().route("/chat", post(chat).fallback(super::meta::not_found))
}

/// Consult the virtual assistant
async fn chat(
    Extension(service): Extension<Arc<MaljutService>>,
    request: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<Envelope<ChatData>>, ApiError> {
    // An unparseable body still gets the uniform envelope instead of
    // the framework's plain-text rejection.
    let Json(request) = request.map_err(|rejection| {
        ApiError::BadRequest(format!("Cuerpo JSON inválido: {}", rejection.body_text()))
    })?;

    // The message must exist, be text, and be non-empty once trimmed.
    let raw = request
        .message
        .as_ref()
        .and_then(Value::as_str)
        .ok_or_else(invalid_message)?;

    let message = raw.trim();
    if message.is_empty() {
        return Err(invalid_message());
    }

    // Cheap content-policy check before any external call is made.
    if !is_query_allowed(message) {
        return Err(ApiError::PolicyRejected);
    }

    let response = service.consult(message).await?;

    Ok(Json(Envelope::success(ChatData {
        message: raw.to_string(),
        response,
        timestamp: timestamp(),
    })))
}

fn invalid_message() -> ApiError {
    ApiError::BadRequest(
        "El mensaje es requerido y debe ser una cadena de texto válida".to_string(),
    )
}
