use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use common::Envelope;
use models::{BrandDto, CategoryDto};
use server::auth::AppState;
use server::routes;
use web::{BrandFlows, FlowOutcome, ItemClient};

const ADMIN_TOKEN: &str = "test-secret";

fn cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
    // Kept for direct inspection of persisted state after partial failures.
    state: AppState,
}

async fn start_server() -> anyhow::Result<TestApp> {
    // Isolated store files per test run.
    let data_dir = std::env::temp_dir().join(format!("item-api-e2e-{}", Uuid::new_v4()));
    let state = server::build_state(&data_dir, ADMIN_TOKEN).await?;

    let app: Router = routes::build_router(cors(), state.clone());
    let listener = tokio::net::TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url, state })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder().build().expect("reqwest client")
}

fn flows(app: &TestApp) -> BrandFlows<ItemClient> {
    let api = ItemClient::new(app.base_url.clone(), Duration::from_secs(5)).expect("item client");
    BrandFlows::new(api)
}

async fn create_brand(app: &TestApp, name: &str) -> BrandDto {
    let resp: Envelope<BrandDto> = client()
        .put(format!("{}/brands", app.base_url))
        .bearer_auth(ADMIN_TOKEN)
        .json(&BrandDto { name: name.into(), ..Default::default() })
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("decode");
    assert!(resp.is_success, "create failed: {:?}", resp.error_messages);
    resp.result.expect("created brand")
}

async fn create_category(app: &TestApp, name: &str) -> CategoryDto {
    let resp: Envelope<CategoryDto> = client()
        .put(format!("{}/categories", app.base_url))
        .bearer_auth(ADMIN_TOKEN)
        .json(&CategoryDto { name: name.into(), ..Default::default() })
        .send()
        .await
        .expect("send")
        .json()
        .await
        .expect("decode");
    assert!(resp.is_success, "create failed: {:?}", resp.error_messages);
    resp.result.expect("created category")
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_mutations_require_admin_token() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .put(format!("{}/brands", app.base_url))
        .json(&BrandDto { name: "Acme".into(), ..Default::default() })
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);

    let res = c
        .put(format!("{}/brands", app.base_url))
        .bearer_auth("wrong-token")
        .json(&BrandDto { name: "Acme".into(), ..Default::default() })
        .send()
        .await?;
    assert_eq!(res.status(), reqwest::StatusCode::UNAUTHORIZED);

    // Reads stay anonymous.
    let res = c.get(format!("{}/brands", app.base_url)).send().await?;
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn e2e_create_then_get_round_trip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let created = create_brand(&app, "Acme").await;
    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Acme");

    let fetched: Envelope<BrandDto> = c
        .get(format!("{}/brands/{}", app.base_url, created.id))
        .send()
        .await?
        .json()
        .await?;
    assert!(fetched.is_success);
    assert_eq!(fetched.result.unwrap(), created);

    let by_name: Envelope<BrandDto> = c
        .get(format!("{}/brands/name/Acme", app.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert!(by_name.is_success);
    assert_eq!(by_name.result.unwrap().id, created.id);

    let listed: Envelope<Vec<BrandDto>> =
        c.get(format!("{}/brands", app.base_url)).send().await?.json().await?;
    assert_eq!(listed.result.unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn e2e_get_by_name_missing_reports_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;

    let resp: Envelope<BrandDto> = client()
        .get(format!("{}/brands/name/nonexistent", app.base_url))
        .send()
        .await?
        .json()
        .await?;
    assert!(!resp.is_success);
    assert_eq!(resp.error_messages, vec!["not found".to_string()]);
    Ok(())
}

#[tokio::test]
async fn e2e_update_missing_id_fails_without_creating() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let ghost = BrandDto { id: 42, name: "Ghost".into(), ..Default::default() };
    let resp: Envelope<BrandDto> = c
        .post(format!("{}/brands", app.base_url))
        .bearer_auth(ADMIN_TOKEN)
        .json(&ghost)
        .send()
        .await?
        .json()
        .await?;
    assert!(!resp.is_success);
    assert!(resp.error_messages[0].contains("not found"));

    let listed: Envelope<Vec<BrandDto>> =
        c.get(format!("{}/brands", app.base_url)).send().await?.json().await?;
    assert!(listed.result.unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_delete_missing_id_stays_an_ordinary_failure() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    for _ in 0..2 {
        let resp: Envelope<()> = c
            .delete(format!("{}/brands", app.base_url))
            .bearer_auth(ADMIN_TOKEN)
            .json(&7_i64)
            .send()
            .await?
            .json()
            .await?;
        assert!(!resp.is_success);
        assert_eq!(resp.error_messages, vec!["not found to delete".to_string()]);
    }
    Ok(())
}

#[tokio::test]
async fn e2e_validation_failure_reports_rule_messages() -> anyhow::Result<()> {
    let app = start_server().await?;

    let resp: Envelope<BrandDto> = client()
        .put(format!("{}/brands", app.base_url))
        .bearer_auth(ADMIN_TOKEN)
        .json(&BrandDto { name: "   ".into(), ..Default::default() })
        .send()
        .await?
        .json()
        .await?;
    assert!(!resp.is_success);
    assert_eq!(resp.error_messages, vec!["name is required".to_string()]);
    Ok(())
}

#[tokio::test]
async fn e2e_create_flow_attaches_links_from_add_list() -> anyhow::Result<()> {
    let app = start_server().await?;
    let category = create_category(&app, "Tools").await;

    let mut dto = BrandDto { name: "Acme".into(), ..Default::default() };
    dto.category_id_add = vec![category.id];

    let out = flows(&app).create(dto, ADMIN_TOKEN).await;
    let id = match out {
        FlowOutcome::Details { id } => id,
        other => panic!("expected details, got {:?}", other),
    };

    assert_eq!(app.state.links.links_of(id).await.unwrap(), vec![category.id]);
    Ok(())
}

#[tokio::test]
async fn e2e_edit_flow_full_success_navigates_to_details() -> anyhow::Result<()> {
    let app = start_server().await?;
    let brand = create_brand(&app, "Acme").await;
    let keep = create_category(&app, "Tools").await;
    let toys = create_category(&app, "Toys").await;
    let seeded = app.state.links.add(brand.id, vec![toys.id]).await;
    assert!(seeded.is_success);

    let mut dto = brand.clone();
    dto.name = "Acme Industrial".into();
    dto.category_id_add = vec![keep.id];
    dto.category_id_remove = vec![toys.id];

    let out = flows(&app).edit(dto, ADMIN_TOKEN).await;
    assert_eq!(out, FlowOutcome::Details { id: brand.id });

    assert_eq!(app.state.links.links_of(brand.id).await.unwrap(), vec![keep.id]);
    let fetched: Envelope<BrandDto> = client()
        .get(format!("{}/brands/{}", app.base_url, brand.id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched.result.unwrap().name, "Acme Industrial");
    Ok(())
}

#[tokio::test]
async fn e2e_edit_flow_keeps_committed_base_update_after_link_failure() -> anyhow::Result<()> {
    let app = start_server().await?;
    let brand = create_brand(&app, "Acme").await;

    // Step 1 succeeds, step 2 fails on a category that does not exist.
    let mut dto = brand.clone();
    dto.name = "Renamed".into();
    dto.category_id_add = vec![999];

    let out = flows(&app).edit(dto, ADMIN_TOKEN).await;
    match out {
        FlowOutcome::Redisplay { errors, .. } => {
            assert_eq!(errors, vec!["category 999 not found".to_string()]);
        }
        other => panic!("expected redisplay, got {:?}", other),
    }

    // The base update was not rolled back.
    let fetched: Envelope<BrandDto> = client()
        .get(format!("{}/brands/{}", app.base_url, brand.id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched.result.unwrap().name, "Renamed");
    Ok(())
}

#[tokio::test]
async fn e2e_edit_flow_invalid_base_still_attempts_link_step() -> anyhow::Result<()> {
    let app = start_server().await?;
    let brand = create_brand(&app, "Acme").await;
    let category = create_category(&app, "Tools").await;

    let mut dto = brand.clone();
    dto.name = "".into();
    dto.category_id_add = vec![category.id];

    let out = flows(&app).edit(dto, ADMIN_TOKEN).await;
    match out {
        FlowOutcome::Redisplay { errors, .. } => {
            assert_eq!(errors, vec!["name is required".to_string()]);
        }
        other => panic!("expected redisplay, got {:?}", other),
    }

    // The add step ran and committed despite the failed base update.
    assert_eq!(app.state.links.links_of(brand.id).await.unwrap(), vec![category.id]);
    // And the failed base update left the name untouched.
    let fetched: Envelope<BrandDto> = client()
        .get(format!("{}/brands/{}", app.base_url, brand.id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched.result.unwrap().name, "Acme");
    Ok(())
}
