//! REST 网关
//!
//! 唯一的后端访问入口：所有商品/订单/分类/管理数据都经由这里。
//! `Authorization: Bearer <token>` 统一在 [`ApiGateway::request`] 注入，
//! 令牌直接读取持久化的会话记录——请求签名与 UI 状态解耦，
//! 任何调用方（包括非 UI 脚本）都能以同样方式取到令牌。

use eshop_shared::{
    AdminStats, AuthResponse, Category, CreateOrderRequest, CreateReviewRequest, ErrorBody,
    HEADER_AUTHORIZATION, LoginRequest, Order, OrderStatus, Product, ProductListResponse,
    ProductQuery, RegisterRequest, Role, SESSION_STORAGE_KEY, SaveCategoryRequest,
    SaveProductRequest, UpdateOrderStatusRequest, UpdateProfileRequest, UpdateRoleRequest,
    UserInfo,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::store::session::Session;
use crate::web::{HttpClient, HttpError, HttpRequestBuilder, LocalStorage};

/// API 基地址：编译期环境变量 `ESHOP_API_URL`，默认本地后端
const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// 网关错误分类
///
/// 按响应状态归类，调用方以短暂通知（toast）呈现，
/// 失败从不污染购物车/会话状态。
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// 网络层失败（请求未到达或响应不可读）
    Network(String),
    /// 401：凭证无效或过期
    Unauthorized(String),
    /// 403：角色不足
    Forbidden(String),
    /// 400：请求体校验失败
    Validation(String),
    /// 404：资源不存在
    NotFound(String),
    /// 其余非 2xx（5xx 等）
    Server(String),
    /// 2xx 但响应体无法按预期结构解析
    Decode(String),
}

impl ApiError {
    /// 按状态码归类一条错误消息
    fn from_status(status: u16, message: String) -> Self {
        match status {
            400 => ApiError::Validation(message),
            401 => ApiError::Unauthorized(message),
            403 => ApiError::Forbidden(message),
            404 => ApiError::NotFound(message),
            _ => ApiError::Server(message),
        }
    }

    /// 面向用户的消息（toast 文案）
    pub fn message(&self) -> &str {
        match self {
            ApiError::Network(msg)
            | ApiError::Unauthorized(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Validation(msg)
            | ApiError::NotFound(msg)
            | ApiError::Server(msg)
            | ApiError::Decode(msg) => msg,
        }
    }
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// 从持久化会话记录中读取 Bearer 令牌
///
/// 未登录（无记录或空令牌）时返回 None，请求以匿名身份发出。
fn bearer_token() -> Option<String> {
    let raw = LocalStorage::get(SESSION_STORAGE_KEY)?;
    let session: Session = serde_json::from_str(&raw).ok()?;
    if session.token.is_empty() {
        None
    } else {
        Some(session.token)
    }
}

/// REST 网关客户端
#[derive(Clone, Debug, PartialEq)]
pub struct ApiGateway {
    base_url: String,
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiGateway {
    pub fn new() -> Self {
        let base_url = option_env!("ESHOP_API_URL").unwrap_or(DEFAULT_API_URL);
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 构建请求：统一注入鉴权头与 Content-Type
    fn request(
        &self,
        method: fn(&str) -> HttpRequestBuilder,
        path: &str,
    ) -> HttpRequestBuilder {
        let mut builder = method(&self.url(path)).header("Content-Type", "application/json");
        if let Some(token) = bearer_token() {
            builder = builder.header(HEADER_AUTHORIZATION, &format!("Bearer {}", token));
        }
        builder
    }

    /// 发送并解析 JSON 响应；非 2xx 时解析 `{ message }` 错误体并归类
    async fn send_json<T: DeserializeOwned>(
        builder: HttpRequestBuilder,
    ) -> Result<T, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| format!("request failed with status {}", status));
            return Err(ApiError::from_status(status, message));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 发送但忽略响应体（删除类接口）
    async fn send_unit(builder: HttpRequestBuilder) -> Result<(), ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.text().await?;
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|e| e.message)
            .unwrap_or_else(|_| format!("request failed with status {}", status));
        Err(ApiError::from_status(status, message))
    }

    fn json_body<T: Serialize>(
        builder: HttpRequestBuilder,
        payload: &T,
    ) -> Result<HttpRequestBuilder, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(builder.body(body))
    }

    // =========================================================
    // Auth
    // =========================================================

    pub async fn register(&self, data: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        let req = Self::json_body(self.request(HttpClient::post, "/auth/register"), data)?;
        Self::send_json(req).await
    }

    pub async fn login(&self, data: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let req = Self::json_body(self.request(HttpClient::post, "/auth/login"), data)?;
        Self::send_json(req).await
    }

    pub async fn get_profile(&self) -> Result<UserInfo, ApiError> {
        Self::send_json(self.request(HttpClient::get, "/auth/profile")).await
    }

    pub async fn update_profile(&self, data: &UpdateProfileRequest) -> Result<UserInfo, ApiError> {
        let req = Self::json_body(self.request(HttpClient::put, "/auth/profile"), data)?;
        Self::send_json(req).await
    }

    // =========================================================
    // Products
    // =========================================================

    pub async fn get_products(&self, query: &ProductQuery) -> Result<ProductListResponse, ApiError> {
        let path = format!("/products{}", query.to_query_string());
        Self::send_json(self.request(HttpClient::get, &path)).await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        Self::send_json(self.request(HttpClient::get, &format!("/products/{}", id))).await
    }

    pub async fn get_featured_products(&self) -> Result<Vec<Product>, ApiError> {
        Self::send_json(self.request(HttpClient::get, "/products/featured")).await
    }

    pub async fn create_product(&self, data: &SaveProductRequest) -> Result<Product, ApiError> {
        let req = Self::json_body(self.request(HttpClient::post, "/products"), data)?;
        Self::send_json(req).await
    }

    pub async fn update_product(
        &self,
        id: &str,
        data: &SaveProductRequest,
    ) -> Result<Product, ApiError> {
        let req = Self::json_body(self.request(HttpClient::put, &format!("/products/{}", id)), data)?;
        Self::send_json(req).await
    }

    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        Self::send_unit(self.request(HttpClient::delete, &format!("/products/{}", id))).await
    }

    pub async fn add_review(
        &self,
        product_id: &str,
        data: &CreateReviewRequest,
    ) -> Result<(), ApiError> {
        let req = Self::json_body(
            self.request(HttpClient::post, &format!("/products/{}/reviews", product_id)),
            data,
        )?;
        Self::send_unit(req).await
    }

    // =========================================================
    // Orders
    // =========================================================

    pub async fn create_order(&self, data: &CreateOrderRequest) -> Result<Order, ApiError> {
        let req = Self::json_body(self.request(HttpClient::post, "/orders"), data)?;
        Self::send_json(req).await
    }

    pub async fn get_order(&self, id: &str) -> Result<Order, ApiError> {
        Self::send_json(self.request(HttpClient::get, &format!("/orders/{}", id))).await
    }

    pub async fn get_my_orders(&self) -> Result<Vec<Order>, ApiError> {
        Self::send_json(self.request(HttpClient::get, "/orders/myorders")).await
    }

    pub async fn get_all_orders(&self) -> Result<Vec<Order>, ApiError> {
        Self::send_json(self.request(HttpClient::get, "/orders")).await
    }

    pub async fn update_order_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let req = Self::json_body(
            self.request(HttpClient::put, &format!("/orders/{}/status", id)),
            &UpdateOrderStatusRequest { status },
        )?;
        Self::send_json(req).await
    }

    // =========================================================
    // Categories
    // =========================================================

    pub async fn get_categories(&self) -> Result<Vec<Category>, ApiError> {
        Self::send_json(self.request(HttpClient::get, "/categories")).await
    }

    /// 管理端列表：包含已下架分类
    pub async fn get_all_categories(&self) -> Result<Vec<Category>, ApiError> {
        Self::send_json(self.request(HttpClient::get, "/categories/all")).await
    }

    pub async fn create_category(&self, data: &SaveCategoryRequest) -> Result<Category, ApiError> {
        let req = Self::json_body(self.request(HttpClient::post, "/categories"), data)?;
        Self::send_json(req).await
    }

    pub async fn update_category(
        &self,
        id: &str,
        data: &SaveCategoryRequest,
    ) -> Result<Category, ApiError> {
        let req =
            Self::json_body(self.request(HttpClient::put, &format!("/categories/{}", id)), data)?;
        Self::send_json(req).await
    }

    pub async fn delete_category(&self, id: &str) -> Result<(), ApiError> {
        Self::send_unit(self.request(HttpClient::delete, &format!("/categories/{}", id))).await
    }

    // =========================================================
    // Admin
    // =========================================================

    pub async fn get_stats(&self) -> Result<AdminStats, ApiError> {
        Self::send_json(self.request(HttpClient::get, "/admin/stats")).await
    }

    pub async fn get_users(&self) -> Result<Vec<UserInfo>, ApiError> {
        Self::send_json(self.request(HttpClient::get, "/admin/users")).await
    }

    pub async fn update_user_role(&self, id: &str, role: Role) -> Result<UserInfo, ApiError> {
        let req = Self::json_body(
            self.request(HttpClient::put, &format!("/admin/users/{}", id)),
            &UpdateRoleRequest { role },
        )?;
        Self::send_json(req).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        Self::send_unit(self.request(HttpClient::delete, &format!("/admin/users/{}", id))).await
    }
}
