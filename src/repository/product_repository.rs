use crate::domain::product::{Product, ProductDraft, ProductId};
use crate::repository::api_error::ApiResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    pub page: u32,
    pub limit: u32,
}

impl SearchQuery {
    pub fn new(search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            page: 1,
            limit: 10,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit.max(1);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchPage {
    pub products: Vec<Product>,
    pub total: usize,
    pub page: u32,
    pub limit: u32,
}

impl SearchPage {
    pub fn has_more(&self) -> bool {
        (self.page as usize) * (self.limit as usize) < self.total
    }
}

/// The search endpoint answers either with a bare array or with a paging envelope.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum SearchPayload {
    Bare(Vec<Product>),
    Envelope {
        #[serde(alias = "products")]
        data: Vec<Product>,
        total: Option<usize>,
        page: Option<u32>,
        limit: Option<u32>,
    },
}

impl SearchPayload {
    pub(crate) fn into_page(self, query: &SearchQuery) -> SearchPage {
        match self {
            SearchPayload::Bare(products) => SearchPage {
                total: products.len(),
                products,
                page: query.page,
                limit: query.limit,
            },
            SearchPayload::Envelope {
                data,
                total,
                page,
                limit,
            } => SearchPage {
                total: total.unwrap_or(data.len()),
                products: data,
                page: page.unwrap_or(query.page),
                limit: limit.unwrap_or(query.limit),
            },
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: Some("ok".to_string()),
            details: serde_json::Map::new(),
        }
    }

    pub fn summary(&self) -> String {
        self.status.clone().unwrap_or_else(|| "reachable".to_string())
    }
}

/// Access to the remote product collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> ApiResult<Vec<Product>>;

    async fn get(&self, id: ProductId) -> ApiResult<Product>;

    async fn create(&self, draft: &ProductDraft) -> ApiResult<Product>;

    async fn update(&self, id: ProductId, draft: &ProductDraft) -> ApiResult<Product>;

    async fn delete(&self, id: ProductId) -> ApiResult<()>;

    async fn search(&self, query: &SearchQuery) -> ApiResult<SearchPage>;

    async fn health(&self) -> ApiResult<HealthStatus>;
}
