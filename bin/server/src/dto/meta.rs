use maljut_core::BusinessInfo;
use serde::Serialize;

/// Fixed catalog of the available endpoints, served by the API index
/// and by the not-found handler.
pub const AVAILABLE_ENDPOINTS: [&str; 4] = [
    "POST /api/chat - Consultar al asistente virtual",
    "GET /api/info - Información básica de Maljut Pizzas",
    "GET /api/health - Estado del servidor",
    "GET /api/stats - Estadísticas básicas",
];

/// Business information payload
#[derive(Debug, Serialize)]
pub struct InfoData {
    #[serde(flatten)]
    pub info: BusinessInfo,
    pub timestamp: String,
}

/// Health check payload
#[derive(Debug, Serialize)]
pub struct HealthData {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub uptime: f64,
}

/// Placeholder statistics payload; nothing counts these yet, the
/// counters are served as literal zeros.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsData {
    pub total_consultas: u64,
    pub consultas_hoy: u64,
    pub consultas_exitosas: u64,
    pub consultas_fallidas: u64,
    pub timestamp: String,
}

/// Body of the 404 response for any unmatched route
#[derive(Debug, Serialize)]
pub struct NotFoundBody {
    pub success: bool,
    pub error: String,
    pub path: String,
    #[serde(rename = "availableEndpoints")]
    pub available_endpoints: Vec<String>,
}
