//! API 请求/响应类型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error_code::ErrorCode;
use crate::config::CategoryMode;
use crate::storage::{CategoryCount, Link, LinkStats};

/// 失败响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub code: ErrorCode,
    pub error: String,
}

/// POST /api/links 请求体；字段缺失由 handler 返回 400，而不是反序列化失败
#[derive(Debug, Default, Deserialize)]
pub struct AddLinkRequest {
    pub url: Option<String>,
    pub category: Option<String>,
}

/// GET /api/links 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListLinksQuery {
    pub category: Option<String>,
    pub action: Option<String>,
}

/// GET /api/categories 查询参数
#[derive(Debug, Default, Deserialize)]
pub struct CategoriesQuery {
    pub order: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LinksResponse {
    pub success: bool,
    pub links: Vec<Link>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub success: bool,
    pub link: Link,
}

#[derive(Debug, Serialize)]
pub struct AddLinkResponse {
    pub success: bool,
    pub message: String,
    pub link: Link,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// `?action=categories`：仅分类名，按名称升序
#[derive(Debug, Serialize)]
pub struct CategoryNamesResponse {
    pub success: bool,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<CategoryCount>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub success: bool,
    pub mode: CategoryMode,
    pub categories: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    #[serde(flatten)]
    pub stats: LinkStats,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub success: bool,
    pub status: &'static str,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_links: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub uptime_secs: i64,
}
