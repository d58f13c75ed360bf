use std::sync::Arc;

use axum::{extract::Extension, response::Json, routing::get, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod dto;
mod error;
mod middleware;
mod routers;
mod service;
#[cfg(test)]
mod test_support;

use config::Settings;
use service::MaljutService;

/// Root diagnostic endpoint
async fn root() -> Json<Value> {
    Json(json!({
        "message": "Backend Maljut funcionando correctamente",
        "status": "OK",
        "timestamp": dto::timestamp(),
    }))
}

/// Build the Axum application around an already constructed service
fn create_app(service: Arc<MaljutService>) -> Router {
    Router::new()
        .route("/", get(root).fallback(routers::meta::not_found))
        .nest("/api", routers::create_router())
        .fallback(routers::meta::not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
                .layer(CorsLayer::permissive())
                .layer(Extension(service)),
        )
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "maljut_server=debug,tower_http=debug,axum::rejection=trace".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing credential is fatal here
    let settings = Settings::load()?;

    // Initialize the assistant service
    let service = Arc::new(MaljutService::new(&settings)?);

    // Create the app
    let app = create_app(service);

    // Start the server
    let listener = tokio::net::TcpListener::bind(&settings.server_address()).await?;
    info!("Server listening on {}", settings.server_address());
    info!("API available at http://{}/api", settings.server_address());

    axum::serve(listener, app).await?;

    Ok(())
}
