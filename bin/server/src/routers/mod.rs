use axum::{middleware, Router};

pub mod chat;
pub mod meta;

/// Create the main API router
pub fn create_router() -> Router {
    Router::new()
        .merge(meta::create_router())
        .merge(chat::create_router())
        .layer(middleware::from_fn(crate::middleware::require_json))
}
