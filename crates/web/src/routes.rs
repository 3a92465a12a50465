use std::sync::Arc;

use axum::{extract::State, routing::{get, post}, Json, Router};
use tower_http::trace::TraceLayer;

use common::types::Health;
use models::BrandDto;

use crate::client::ItemClient;
use crate::flows::{BrandFlows, FlowOutcome};

/// Storefront state: the flows wired to the real item API, plus the bearer
/// token threaded explicitly into every flow invocation.
#[derive(Clone)]
pub struct WebState {
    pub flows: Arc<BrandFlows<ItemClient>>,
    pub admin_token: String,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Browser-facing submission surface: decode the transfer object and hand it
/// to the matching flow; the outcome says whether to show details or
/// redisplay the input with errors.
pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/brand/create", post(create_brand))
        .route("/brand/edit", post(edit_brand))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn create_brand(
    State(state): State<WebState>,
    Json(dto): Json<BrandDto>,
) -> Json<FlowOutcome> {
    Json(state.flows.create(dto, &state.admin_token).await)
}

async fn edit_brand(
    State(state): State<WebState>,
    Json(dto): Json<BrandDto>,
) -> Json<FlowOutcome> {
    Json(state.flows.edit(dto, &state.admin_token).await)
}
