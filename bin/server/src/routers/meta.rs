use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{StatusCode, Uri},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};

use crate::{
    dto::{timestamp, Envelope, HealthData, InfoData, NotFoundBody, StatsData, AVAILABLE_ENDPOINTS},
    service::MaljutService,
};

/// Create router for the informational endpoints.
///
/// Each method router falls back to the catalog 404, so a wrong-method
/// request lands there rather than on a bare 405.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(index).fallback(not_found))
        .route("/info", get(info).fallback(not_found))
        .route("/health", get(health).fallback(not_found))
        .route("/stats", get(stats).fallback(not_found))
}

/// API index: welcome banner plus the endpoint catalog
async fn index() -> Json<Value> {
    Json(json!({
        "success": true,
        "message": "Bienvenido a la API de MaljutBot",
        "version": "1.0.0",
        "endpoints": {
            "chat": {
                "method": "POST",
                "path": "/api/chat",
                "description": "Consultar al asistente virtual de Maljut Pizzas",
                "body": {
                    "message": "string (requerido)"
                }
            },
            "info": {
                "method": "GET",
                "path": "/api/info",
                "description": "Obtener información básica de Maljut Pizzas"
            },
            "health": {
                "method": "GET",
                "path": "/api/health",
                "description": "Verificar el estado del servidor"
            },
            "stats": {
                "method": "GET",
                "path": "/api/stats",
                "description": "Obtener estadísticas básicas del servicio"
            }
        },
        "timestamp": timestamp(),
    }))
}

/// Basic business information
async fn info(Extension(service): Extension<Arc<MaljutService>>) -> Json<Envelope<InfoData>> {
    Json(Envelope::success(InfoData {
        info: service.info(),
        timestamp: timestamp(),
    }))
}

/// Server health status
async fn health(Extension(service): Extension<Arc<MaljutService>>) -> Json<Envelope<HealthData>> {
    Json(Envelope::success(HealthData {
        status: "OK".to_string(),
        service: "MaljutBot API".to_string(),
        timestamp: timestamp(),
        uptime: service.uptime_seconds(),
    }))
}

/// Placeholder service statistics
async fn stats() -> Json<Envelope<StatsData>> {
    Json(Envelope::success(StatsData {
        total_consultas: 0,
        consultas_hoy: 0,
        consultas_exitosas: 0,
        consultas_fallidas: 0,
        timestamp: timestamp(),
    }))
}

/// Fallback for any unmatched route
pub async fn not_found(uri: Uri) -> (StatusCode, Json<NotFoundBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundBody {
            success: false,
            error: "Endpoint no encontrado".to_string(),
            path: uri.path().to_string(),
            available_endpoints: AVAILABLE_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
        }),
    )
}
