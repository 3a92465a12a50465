use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use models::{Brand, Category};
use service::storage::{JsonEntityStore, JsonLinkStore};
use service::{BrandMapper, CategoryMapper, EntityService, LinkService};

use crate::auth::{AdminAuthConfig, AppState};
use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Wire the JSON stores and per-resource services under `data_dir`.
/// Exposed for tests, which point this at an isolated directory.
pub async fn build_state(data_dir: impl AsRef<Path>, admin_token: &str) -> anyhow::Result<AppState> {
    let dir = data_dir.as_ref();
    let brand_repo = JsonEntityStore::<Brand>::new(dir.join("brands.json")).await?;
    let category_repo = JsonEntityStore::<Category>::new(dir.join("categories.json")).await?;
    let link_repo = JsonLinkStore::new(dir.join("brand_categories.json")).await?;

    Ok(AppState {
        brands: Arc::new(EntityService::new(Arc::clone(&brand_repo), BrandMapper)),
        categories: Arc::new(EntityService::new(Arc::clone(&category_repo), CategoryMapper)),
        links: Arc::new(LinkService::new(link_repo, brand_repo, category_repo)),
        auth: AdminAuthConfig { admin_token: admin_token.to_string() },
    })
}

/// Public entry: build the app and run the item-API HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let cfg = configs::AppConfig::load_and_validate()?;
    let state = build_state("data", &cfg.auth.admin_token).await?;
    let app: Router = routes::build_router(build_cors(), state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting item api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
