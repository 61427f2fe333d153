//! Category rules: validation policy, list filter and sort order.

use serde::{Deserialize, Serialize};

use crate::config::{CategoryMode, LinksConfig};
use crate::errors::LinkError;
use crate::storage::CategoryCount;

/// Sentinel filter value meaning "every category"
pub const ALL_CATEGORIES: &str = "all";

/// 分类校验策略
#[derive(Debug, Clone)]
pub struct CategoryPolicy {
    mode: CategoryMode,
    categories: Vec<String>,
    max_length: usize,
}

impl Default for CategoryPolicy {
    fn default() -> Self {
        Self::from_config(&LinksConfig::default())
    }
}

impl CategoryPolicy {
    pub fn new(mode: CategoryMode, categories: Vec<String>, max_length: usize) -> Self {
        Self {
            mode,
            categories,
            max_length,
        }
    }

    pub fn from_config(config: &LinksConfig) -> Self {
        Self::new(
            config.category_mode,
            config.categories.clone(),
            config.max_category_length,
        )
    }

    pub fn mode(&self) -> CategoryMode {
        self.mode
    }

    /// 配置的分类列表（closed 模式为白名单，open 模式为建议）
    pub fn suggestions(&self) -> &[String] {
        &self.categories
    }

    /// Checks a category label. Labels are stored exactly as given, so
    /// leading or trailing whitespace is rejected rather than trimmed.
    pub fn validate(&self, category: &str) -> Result<(), LinkError> {
        if category.trim().is_empty() {
            return Err(LinkError::validation("Category is required"));
        }
        if category.trim() != category {
            return Err(LinkError::validation(
                "Category must not start or end with whitespace",
            ));
        }
        let length = category.chars().count();
        if length > self.max_length {
            return Err(LinkError::validation(format!(
                "Category is too long ({} characters, max {})",
                length, self.max_length
            )));
        }
        if self.mode == CategoryMode::Closed && !self.categories.iter().any(|c| c == category) {
            return Err(LinkError::validation(format!(
                "Unknown category '{}'. Allowed: {}",
                category,
                self.categories.join(", ")
            )));
        }
        Ok(())
    }
}

/// 列表过滤条件
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `None`, empty and `"all"` select every link
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::All,
            Some(c) if c.is_empty() || c == ALL_CATEGORIES => Self::All,
            Some(c) => Self::Only(c.to_string()),
        }
    }
}

/// 分类列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryOrder {
    /// Category name ascending
    #[default]
    Name,
    /// Count descending, ties by name ascending
    Count,
}

impl std::str::FromStr for CategoryOrder {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "count" => Ok(Self::Count),
            _ => Err(format!("Invalid category order: '{}'. Valid: name, count", s)),
        }
    }
}

impl CategoryOrder {
    pub fn apply(self, counts: &mut [CategoryCount]) {
        match self {
            Self::Name => counts.sort_by(|a, b| a.category.cmp(&b.category)),
            Self::Count => counts.sort_by(|a, b| {
                b.count
                    .cmp(&a.count)
                    .then_with(|| a.category.cmp(&b.category))
            }),
        }
    }
}
