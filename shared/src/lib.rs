//! E-Shop 前后端共享协议层
//!
//! 定义 REST API 的线上数据模型（与后端 JSON 字段一一对应，
//! 字段统一为 camelCase，主键为 Mongo 风格的 `_id`），
//! 以及购物车定价公式等前后端必须一致的业务常量。

use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// LocalStorage 中购物车持久化记录的键
pub const CART_STORAGE_KEY: &str = "eshop_cart";
/// LocalStorage 中会话持久化记录的键
pub const SESSION_STORAGE_KEY: &str = "eshop_session";
/// 鉴权请求头（值为 "Bearer <token>"）
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

mod admin;
mod category;
mod order;
pub mod pricing;
mod product;
mod user;

pub use admin::AdminStats;
pub use category::{Category, SaveCategoryRequest};
pub use order::{
    CreateOrderRequest, Order, OrderItem, OrderStatus, PaymentMethod, ShippingAddress,
    UpdateOrderStatusRequest,
};
pub use product::{
    CreateReviewRequest, Product, ProductImage, ProductListResponse, ProductQuery, Review,
    SaveProductRequest,
};
pub use user::{
    AuthResponse, LoginRequest, RegisterRequest, Role, UpdateProfileRequest, UpdateRoleRequest,
    UserInfo,
};

/// 后端错误响应体
///
/// 所有非 2xx 响应的 body 统一为 `{ "message": "..." }`。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}
