use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tracing::info;

use crate::client::ItemClient;
use crate::flows::BrandFlows;
use crate::routes::{self, WebState};

/// Public entry: build the storefront app and run its HTTP server.
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_default();

    let cfg = configs::AppConfig::load_and_validate()?;
    let client = ItemClient::new(
        cfg.upstream.base_url.clone(),
        Duration::from_secs(cfg.upstream.timeout_secs),
    )?;
    let state = WebState {
        flows: Arc::new(BrandFlows::new(client)),
        admin_token: cfg.auth.admin_token.clone(),
    };
    let app: Router = routes::build_router(state);

    let addr: SocketAddr = format!("{}:{}", cfg.storefront.host, cfg.storefront.port).parse()?;
    info!(%addr, upstream = %cfg.upstream.base_url, "starting storefront");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
