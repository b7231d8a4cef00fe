use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Products with stock at or below this level count as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload sent to the backend on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub stock: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum StockStatus {
    Available,
    Limited,
    OutOfStock,
}

impl StockStatus {
    pub fn from_stock(stock: u32) -> Self {
        match stock {
            0 => StockStatus::OutOfStock,
            s if s <= LOW_STOCK_THRESHOLD => StockStatus::Limited,
            _ => StockStatus::Available,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Available => "Available",
            StockStatus::Limited => "Limited Stock",
            StockStatus::OutOfStock => "Out of Stock",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            StockStatus::Available => "#10B981",
            StockStatus::Limited => "#F59E0B",
            StockStatus::OutOfStock => "#EF4444",
        }
    }
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, stock: u32) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            description: None,
            category: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_draft(id: impl Into<ProductId>, draft: ProductDraft) -> Self {
        Self::new(id, draft.name, draft.price, draft.stock)
    }

    /// Applies an update payload, bumping `updated_at`.
    pub fn apply(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.price = draft.price;
        self.stock = draft.stock;
        self.updated_at = Utc::now();
    }

    pub fn inventory_value(&self) -> f64 {
        self.price * self.stock as f64
    }

    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_stock(self.stock)
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock <= LOW_STOCK_THRESHOLD
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.stock == 0
    }

    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            price: self.price,
            stock: self.stock,
        }
    }
}
