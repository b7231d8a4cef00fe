use crate::domain::product::{LOW_STOCK_THRESHOLD, Product};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;

pub const TOP_BY_VALUE_LIMIT: usize = 5;
pub const RESTOCK_LIMIT: usize = 5;
pub const TOP_BY_PRICE_LIMIT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total_products: usize,
    pub total_value: f64,
    pub low_stock_products: usize,
    pub out_of_stock_products: usize,
}

impl InventoryStats {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            total_products: products.len(),
            total_value: products.iter().map(Product::inventory_value).sum(),
            low_stock_products: products.iter().filter(|p| p.is_low_stock()).count(),
            out_of_stock_products: products.iter().filter(|p| p.is_out_of_stock()).count(),
        }
    }
}

/// One bar of the "top products by inventory value" chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedProduct {
    pub rank: usize,
    pub product: Product,
    pub total_value: f64,
    /// Value relative to the top entry, in `0.0..=1.0`
    pub share: f64,
}

/// Products ranked by price × stock, highest first.
pub fn top_by_value(products: &[Product], limit: usize) -> Vec<RankedProduct> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by_key(|p| Reverse(OrderedFloat(p.inventory_value())));
    ranked.truncate(limit);

    let max_value = ranked
        .first()
        .map(|p| p.inventory_value())
        .filter(|v| *v > 0.0)
        .unwrap_or(1.0);

    ranked
        .into_iter()
        .enumerate()
        .map(|(i, product)| {
            let total_value = product.inventory_value();
            RankedProduct {
                rank: i + 1,
                product: product.clone(),
                total_value,
                share: (total_value / max_value).clamp(0.0, 1.0),
            }
        })
        .collect()
}

/// Products at or below the low-stock threshold (sold out included), emptiest first.
pub fn restock_candidates(products: &[Product], limit: usize) -> Vec<Product> {
    let mut low: Vec<&Product> = products
        .iter()
        .filter(|p| p.stock <= LOW_STOCK_THRESHOLD)
        .collect();
    low.sort_by_key(|p| p.stock);
    low.into_iter().take(limit).cloned().collect()
}

pub fn top_by_price(products: &[Product], limit: usize) -> Vec<Product> {
    let mut ranked: Vec<&Product> = products.iter().collect();
    ranked.sort_by_key(|p| Reverse(OrderedFloat(p.price)));
    ranked.into_iter().take(limit).cloned().collect()
}

/// Everything the dashboard screen shows, derived from one fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dashboard {
    pub stats: InventoryStats,
    pub top_by_value: Vec<RankedProduct>,
    pub restock: Vec<Product>,
    pub top_by_price: Vec<Product>,
}

impl Dashboard {
    pub fn from_products(products: &[Product]) -> Self {
        Self {
            stats: InventoryStats::from_products(products),
            top_by_value: top_by_value(products, TOP_BY_VALUE_LIMIT),
            restock: restock_candidates(products, RESTOCK_LIMIT),
            top_by_price: top_by_price(products, TOP_BY_PRICE_LIMIT),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stats.total_products == 0
    }
}
