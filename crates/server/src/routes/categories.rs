use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use common::Envelope;
use models::CategoryDto;

use crate::auth::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list))
        .route("/categories/:id", get(get_by_id))
        .route("/categories/name/:name", get(get_by_name))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new().route("/categories", post(update).put(create).delete(remove))
}

async fn list(State(state): State<AppState>) -> Json<Envelope<Vec<CategoryDto>>> {
    Json(state.categories.list().await)
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<Envelope<CategoryDto>> {
    Json(state.categories.get_by_id(id).await)
}

async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Envelope<CategoryDto>> {
    Json(state.categories.get_by_name(&name).await)
}

async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CategoryDto>,
) -> Json<Envelope<CategoryDto>> {
    Json(state.categories.create(dto).await)
}

async fn update(
    State(state): State<AppState>,
    Json(dto): Json<CategoryDto>,
) -> Json<Envelope<CategoryDto>> {
    Json(state.categories.update(dto).await)
}

async fn remove(State(state): State<AppState>, Json(id): Json<i64>) -> Json<Envelope<()>> {
    Json(state.categories.delete(id).await)
}
