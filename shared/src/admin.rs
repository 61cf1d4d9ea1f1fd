use serde::{Deserialize, Serialize};

use crate::{Order, Product};

/// `GET /admin/stats` 返回的看板汇总
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u32,
    #[serde(default)]
    pub total_products: u32,
    #[serde(default)]
    pub total_orders: u32,
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub pending_orders: u32,
    #[serde(default)]
    pub processing_orders: u32,
    #[serde(default)]
    pub shipped_orders: u32,
    #[serde(default)]
    pub delivered_orders: u32,
    #[serde(default)]
    pub recent_orders: Vec<Order>,
    #[serde(default)]
    pub low_stock_products: Vec<Product>,
}
