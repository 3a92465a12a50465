use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use common::Envelope;
use models::BrandDto;

/// Generic typed access to the item API: one operation per verb,
/// parameterized over request-body and result types.
///
/// Transport faults, timeouts and undecodable bodies all collapse to `None`;
/// callers only ever check `is_success` or absence, never a transport error.
pub struct ItemClient {
    http: reqwest::Client,
    base_url: String,
}

impl ItemClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    pub async fn get<TOut: DeserializeOwned>(
        &self,
        relative_url: &str,
        token: Option<&str>,
    ) -> Option<TOut> {
        self.send(Method::GET, relative_url, None::<&()>, token).await
    }

    /// PUT creates on the item API.
    pub async fn create_item<TOut: DeserializeOwned, TIn: Serialize + Sync>(
        &self,
        relative_url: &str,
        body: &TIn,
        token: Option<&str>,
    ) -> Option<TOut> {
        self.send(Method::PUT, relative_url, Some(body), token).await
    }

    /// POST updates on the item API.
    pub async fn update_item<TOut: DeserializeOwned, TIn: Serialize + Sync + ?Sized>(
        &self,
        relative_url: &str,
        body: &TIn,
        token: Option<&str>,
    ) -> Option<TOut> {
        self.send(Method::POST, relative_url, Some(body), token).await
    }

    /// DELETE with the id as the body.
    pub async fn delete_item<TOut: DeserializeOwned>(
        &self,
        relative_url: &str,
        id: i64,
        token: Option<&str>,
    ) -> Option<TOut> {
        self.send(Method::DELETE, relative_url, Some(&id), token).await
    }

    async fn send<TOut, TIn>(
        &self,
        method: Method,
        relative_url: &str,
        body: Option<&TIn>,
        token: Option<&str>,
    ) -> Option<TOut>
    where
        TOut: DeserializeOwned,
        TIn: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, relative_url.trim_start_matches('/'));
        let mut req = self.http.request(method, &url);
        if let Some(t) = token {
            req = req.bearer_auth(t);
        }
        if let Some(b) = body {
            req = req.json(b);
        }

        match req.send().await {
            Ok(resp) => match resp.json::<TOut>().await {
                Ok(out) => Some(out),
                Err(e) => {
                    warn!(%url, error = %e, "item api response not decodable");
                    None
                }
            },
            Err(e) => {
                warn!(%url, error = %e, "item api request failed");
                None
            }
        }
    }
}

/// Seam between the orchestration flows and the item API, so flows can be
/// exercised against doubles.
#[async_trait]
pub trait ItemApi: Send + Sync {
    async fn create_brand(&self, dto: &BrandDto, token: &str) -> Option<Envelope<BrandDto>>;
    async fn update_brand(&self, dto: &BrandDto, token: &str) -> Option<Envelope<BrandDto>>;
    async fn add_categories(
        &self,
        brand_id: i64,
        category_ids: &[i64],
        token: &str,
    ) -> Option<Envelope<Vec<i64>>>;
    async fn remove_categories(
        &self,
        brand_id: i64,
        category_ids: &[i64],
        token: &str,
    ) -> Option<Envelope<Vec<i64>>>;
}

#[async_trait]
impl ItemApi for ItemClient {
    async fn create_brand(&self, dto: &BrandDto, token: &str) -> Option<Envelope<BrandDto>> {
        self.create_item("brands", dto, Some(token)).await
    }

    async fn update_brand(&self, dto: &BrandDto, token: &str) -> Option<Envelope<BrandDto>> {
        self.update_item("brands", dto, Some(token)).await
    }

    async fn add_categories(
        &self,
        brand_id: i64,
        category_ids: &[i64],
        token: &str,
    ) -> Option<Envelope<Vec<i64>>> {
        self.update_item(&format!("brands/addcat/{}", brand_id), category_ids, Some(token))
            .await
    }

    async fn remove_categories(
        &self,
        brand_id: i64,
        category_ids: &[i64],
        token: &str,
    ) -> Option<Envelope<Vec<i64>>> {
        self.update_item(&format!("brands/remcat/{}", brand_id), category_ids, Some(token))
            .await
    }
}
