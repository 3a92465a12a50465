use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};

use models::{Brand, Category};
use service::storage::{JsonEntityStore, JsonLinkStore};
use service::{BrandMapper, CategoryMapper, EntityService, LinkService};

pub type BrandRepo = JsonEntityStore<Brand>;
pub type CategoryRepo = JsonEntityStore<Category>;
pub type BrandService = EntityService<BrandRepo, BrandMapper>;
pub type CategoryService = EntityService<CategoryRepo, CategoryMapper>;
pub type BrandLinkService = LinkService<JsonLinkStore, BrandRepo, CategoryRepo>;

#[derive(Clone)]
pub struct AdminAuthConfig {
    pub admin_token: String,
}

#[derive(Clone)]
pub struct AppState {
    pub brands: Arc<BrandService>,
    pub categories: Arc<CategoryService>,
    pub links: Arc<BrandLinkService>,
    pub auth: AdminAuthConfig,
}

/// Middleware guarding mutating routes: requires `Authorization: Bearer`
/// matching the configured admin token. Reads stay anonymous.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "));

    match token {
        Some(t) if !t.trim().is_empty() && t == state.auth.admin_token => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}
