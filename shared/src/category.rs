use serde::{Deserialize, Serialize};

/// 商品分类
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 下架的分类仅管理端可见（`GET /categories/all`）
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// 管理端创建/更新分类的请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveCategoryRequest {
    pub name: String,
    pub description: String,
    pub active: bool,
}
