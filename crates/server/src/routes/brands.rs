use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use common::Envelope;
use models::BrandDto;

use crate::auth::AppState;

pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/brands", get(list))
        .route("/brands/:id", get(get_by_id))
        .route("/brands/name/:name", get(get_by_name))
}

pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/brands", post(update).put(create).delete(remove))
        .route("/brands/addcat/:id", post(add_categories))
        .route("/brands/remcat/:id", post(remove_categories))
}

async fn list(State(state): State<AppState>) -> Json<Envelope<Vec<BrandDto>>> {
    Json(state.brands.list().await)
}

async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Json<Envelope<BrandDto>> {
    Json(state.brands.get_by_id(id).await)
}

async fn get_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<Envelope<BrandDto>> {
    Json(state.brands.get_by_name(&name).await)
}

/// PUT creates. When the dto carries nested link rows (built from an
/// add-list at request time), they are attached right after the record;
/// a link failure reports errors but does not undo the created brand.
async fn create(
    State(state): State<AppState>,
    Json(dto): Json<BrandDto>,
) -> Json<Envelope<BrandDto>> {
    let link_ids: Vec<i64> = dto.category_links.iter().map(|l| l.category_id).collect();
    let resp = state.brands.create(dto).await;

    if resp.is_success && !link_ids.is_empty() {
        if let Some(created) = resp.result.as_ref() {
            let linked = state.links.add(created.id, link_ids).await;
            if !linked.is_success {
                return Json(Envelope::fail_all(linked.error_messages));
            }
        }
    }
    Json(resp)
}

/// POST updates base fields only; link edits go through addcat/remcat.
async fn update(
    State(state): State<AppState>,
    Json(dto): Json<BrandDto>,
) -> Json<Envelope<BrandDto>> {
    Json(state.brands.update(dto).await)
}

/// DELETE with the id in the body.
async fn remove(State(state): State<AppState>, Json(id): Json<i64>) -> Json<Envelope<()>> {
    Json(state.brands.delete(id).await)
}

async fn add_categories(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(category_ids): Json<Vec<i64>>,
) -> Json<Envelope<Vec<i64>>> {
    Json(state.links.add(id, category_ids).await)
}

async fn remove_categories(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(category_ids): Json<Vec<i64>>,
) -> Json<Envelope<Vec<i64>>> {
    Json(state.links.remove(id, category_ids).await)
}
