use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 商品图片（后端存储为 `{ url }` 对象数组）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
}

/// 商品评价
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(rename = "_id")]
    pub id: String,
    /// 评价者的显示名称（由后端从下单用户快照而来）
    pub name: String,
    pub rating: u8,
    pub comment: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// 商品
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    /// 划线价；大于 price 时前端展示促销标记
    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub brand: String,
    pub stock: u32,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// 平均评分（0.0 - 5.0）
    #[serde(default)]
    pub ratings: f64,
    #[serde(default)]
    pub num_reviews: u32,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// 首图 URL；无图时回退到占位图
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(|i| i.url.as_str())
            .unwrap_or("https://via.placeholder.com/400")
    }

    pub fn on_sale(&self) -> bool {
        self.original_price > self.price
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// `GET /products` 的分页响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub page: u32,
    pub pages: u32,
}

/// 商品列表的筛选参数（仅把非空字段拼进查询串）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductQuery {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: u32,
}

impl ProductQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// 生成 `?page=1&keyword=...` 形式的查询串；page 始终存在
    pub fn to_query_string(&self) -> String {
        let mut query = format!("?page={}", self.page.max(1));
        if let Some(keyword) = self.keyword.as_deref().filter(|s| !s.is_empty()) {
            query.push_str(&format!("&keyword={}", urlencoding::encode(keyword)));
        }
        if let Some(category) = self.category.as_deref().filter(|s| !s.is_empty()) {
            query.push_str(&format!("&category={}", urlencoding::encode(category)));
        }
        if let Some(min) = self.min_price {
            query.push_str(&format!("&minPrice={}", min));
        }
        if let Some(max) = self.max_price {
            query.push_str(&format!("&maxPrice={}", max));
        }
        query
    }
}

/// 管理端创建/更新商品的请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub original_price: f64,
    pub category: String,
    pub brand: String,
    pub stock: u32,
    pub images: Vec<ProductImage>,
    pub featured: bool,
}

/// 提交商品评价的请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReviewRequest {
    pub rating: u8,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_string_always_carries_page() {
        let q = ProductQuery::page(3);
        assert_eq!(q.to_query_string(), "?page=3");
    }

    #[test]
    fn query_string_skips_empty_filters() {
        let q = ProductQuery {
            keyword: Some(String::new()),
            category: Some("Electronics".into()),
            min_price: None,
            max_price: Some(99.5),
            page: 1,
        };
        assert_eq!(
            q.to_query_string(),
            "?page=1&category=Electronics&maxPrice=99.5"
        );
    }

    #[test]
    fn query_string_encodes_keyword() {
        let q = ProductQuery {
            keyword: Some("wireless mouse".into()),
            page: 2,
            ..ProductQuery::default()
        };
        assert_eq!(q.to_query_string(), "?page=2&keyword=wireless%20mouse");
    }

    #[test]
    fn product_falls_back_to_placeholder_image() {
        let json = r#"{"_id":"p1","name":"Widget","price":9.99,"stock":3}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.primary_image(), "https://via.placeholder.com/400");
        assert!(product.in_stock());
        assert!(!product.on_sale());
    }
}
