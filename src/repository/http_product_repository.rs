use crate::config::AppConfig;
use crate::domain::product::{Product, ProductDraft, ProductId};
use crate::repository::api_error::{ApiError, ApiResult};
use crate::repository::product_repository::{
    HealthStatus, ProductRepository, SearchPage, SearchPayload, SearchQuery,
};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};
use uuid::Uuid;

/// `ProductRepository` over the inventory REST API.
#[derive(Clone)]
pub struct HttpProductRepository {
    client: Client,
    base_url: String,
}

impl HttpProductRepository {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> ApiResult<Self> {
        Self::new(config.api_base_url.clone(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Send a request and return the raw body of a successful response.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> ApiResult<String> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();
        debug!(%request_id, method = %method, path = %path, "API request");

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let error = ApiError::from(e);
                error!(
                    %request_id,
                    method = %method,
                    path = %path,
                    error = %error,
                    "API request failed"
                );
                return Err(error);
            }
        };

        let status = response.status();
        let body = response.text().await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        if status.is_success() {
            info!(%request_id, status = status.as_u16(), path = %path, elapsed_ms, "API response");
            Ok(body)
        } else {
            let error = ApiError::from_status(status, &body);
            error!(
                %request_id,
                status = status.as_u16(),
                path = %path,
                elapsed_ms,
                body = %body,
                "API error"
            );
            Err(error)
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let body = self.execute(method, path, request).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProductRepository for HttpProductRepository {
    async fn list(&self) -> ApiResult<Vec<Product>> {
        let path = "/products";
        self.fetch(Method::GET, path, self.request(Method::GET, path)).await
    }

    async fn get(&self, id: ProductId) -> ApiResult<Product> {
        let path = format!("/products/{}", id);
        self.fetch(Method::GET, &path, self.request(Method::GET, &path)).await
    }

    async fn create(&self, draft: &ProductDraft) -> ApiResult<Product> {
        let path = "/products";
        let request = self.request(Method::POST, path).json(draft);
        self.fetch(Method::POST, path, request).await
    }

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> ApiResult<Product> {
        let path = format!("/products/{}", id);
        let request = self.request(Method::PUT, &path).json(draft);
        self.fetch(Method::PUT, &path, request).await
    }

    async fn delete(&self, id: ProductId) -> ApiResult<()> {
        let path = format!("/products/{}", id);
        self.execute(Method::DELETE, &path, self.request(Method::DELETE, &path))
            .await
            .map(|_| ())
    }

    async fn search(&self, query: &SearchQuery) -> ApiResult<SearchPage> {
        let path = "/products/search";
        let request = self.request(Method::GET, path).query(&[
            ("search", query.search.clone()),
            ("page", query.page.to_string()),
            ("limit", query.limit.to_string()),
        ]);
        let payload: SearchPayload = self.fetch(Method::GET, path, request).await?;
        Ok(payload.into_page(query))
    }

    async fn health(&self) -> ApiResult<HealthStatus> {
        let path = "/health";
        self.fetch(Method::GET, path, self.request(Method::GET, path)).await
    }
}
