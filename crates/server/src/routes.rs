use axum::{middleware, routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

use crate::auth::{self, AppState};

pub mod brands;
pub mod categories;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full item-API router: anonymous read routes, admin-guarded
/// mutation routes, CORS and request tracing.
pub fn build_router(cors: CorsLayer, state: AppState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .merge(brands::public_routes())
        .merge(categories::public_routes());

    let admin = Router::new()
        .merge(brands::admin_routes())
        .merge(categories::admin_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_admin));

    public
        .merge(admin)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
