use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned link identifier
pub type LinkId = i64;

/// A stored link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: LinkId,
    pub url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// A validated link that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub url: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

impl CategoryCount {
    pub fn new(category: impl Into<String>, count: u64) -> Self {
        Self {
            category: category.into(),
            count,
        }
    }
}

/// 聚合统计（每次调用实时计算）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStats {
    pub total_links: u64,
    pub total_categories: u64,
    pub category_breakdown: Vec<CategoryCount>,
    pub recent_links: Vec<Link>,
}

/// 排序规则：created_at 降序，同一时间戳按 id 降序
pub fn newest_first(a: &Link, b: &Link) -> std::cmp::Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.id.cmp(&a.id))
}
