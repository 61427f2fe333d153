//! Link store
//!
//! Validation, deduplication and aggregation over a `LinkRepository`.
//! Shared by the HTTP API and the CLI.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, instrument};

use super::category::{CategoryFilter, CategoryOrder, CategoryPolicy};
use crate::config::LinksConfig;
use crate::errors::{LinkError, Result};
use crate::storage::{CategoryCount, Link, LinkId, LinkRepository, LinkStats, NewLink};
use crate::utils::url_validator::{UrlRules, validate_url};

pub struct LinkStore {
    repository: Arc<dyn LinkRepository>,
    url_rules: UrlRules,
    category_policy: CategoryPolicy,
    recent_limit: u64,
}

impl LinkStore {
    pub fn new(repository: Arc<dyn LinkRepository>, config: &LinksConfig) -> Self {
        Self {
            repository,
            url_rules: UrlRules::new(config.max_url_length, &config.allowed_schemes),
            category_policy: CategoryPolicy::from_config(config),
            recent_limit: config.recent_limit,
        }
    }

    pub fn with_defaults(repository: Arc<dyn LinkRepository>) -> Self {
        Self::new(repository, &LinksConfig::default())
    }

    pub fn category_policy(&self) -> &CategoryPolicy {
        &self.category_policy
    }

    pub fn backend_name(&self) -> &str {
        self.repository.backend_name()
    }

    /// Creates the links container, the url uniqueness constraint and the
    /// category index when missing. Safe to call repeatedly.
    pub async fn ensure_schema(&self) -> Result<()> {
        self.repository.ensure_schema().await
    }

    /// Validates and stores a new link.
    ///
    /// Duplicates are detected by the storage layer's uniqueness constraint,
    /// so two concurrent adds of the same URL yield exactly one success.
    #[instrument(skip(self), level = "debug")]
    pub async fn add(&self, url: &str, category: &str) -> Result<Link> {
        validate_url(url, &self.url_rules).map_err(|e| LinkError::validation(e.to_string()))?;
        self.category_policy.validate(category)?;

        self.repository
            .insert(NewLink {
                url: url.to_string(),
                category: category.to_string(),
                created_at: Utc::now(),
            })
            .await
    }

    /// Lists links newest first. `None` or `"all"` returns every link.
    pub async fn list(&self, category: Option<&str>) -> Result<Vec<Link>> {
        self.list_filtered(&CategoryFilter::parse(category)).await
    }

    pub async fn list_filtered(&self, filter: &CategoryFilter) -> Result<Vec<Link>> {
        let links = match filter {
            CategoryFilter::All => self.repository.list_all().await?,
            CategoryFilter::Only(category) => self.repository.list_by_category(category).await?,
        };
        debug!("Listed {} links for {:?}", links.len(), filter);
        Ok(links)
    }

    pub async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<CategoryCount>> {
        let mut counts = self.repository.category_counts().await?;
        order.apply(&mut counts);
        Ok(counts)
    }

    /// 实时聚合统计
    ///
    /// totalLinks 由分类计数求和得到，保证与 categoryBreakdown 一致
    pub async fn stats(&self) -> Result<LinkStats> {
        let breakdown = self.list_categories(CategoryOrder::Count).await?;
        let recent_links = self.repository.recent(self.recent_limit).await?;

        Ok(LinkStats {
            total_links: breakdown.iter().map(|c| c.count).sum(),
            total_categories: breakdown.len() as u64,
            category_breakdown: breakdown,
            recent_links,
        })
    }

    pub async fn get(&self, id: LinkId) -> Result<Option<Link>> {
        self.repository.get(id).await
    }

    pub async fn remove(&self, id: LinkId) -> Result<()> {
        self.repository.remove(id).await
    }

    pub async fn count(&self) -> Result<u64> {
        self.repository.count().await
    }

    pub async fn close(&self) -> Result<()> {
        self.repository.close().await
    }
}
