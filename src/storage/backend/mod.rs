//! SeaORM storage backend
//!
//! This module provides relational link storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;
pub mod retry;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::config::DatabaseConfig;
use crate::errors::{LinkError, Result};
use crate::storage::{CategoryCount, Link, LinkId, LinkRepository, NewLink};

pub use connection::{connect_generic, connect_sqlite, ensure_schema};
pub use converters::{model_to_link, new_link_to_active_model};

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
    /// 重试配置
    retry_config: retry::RetryConfig,
}

impl SeaOrmStorage {
    pub async fn new(config: &DatabaseConfig, backend_name: &str) -> Result<Self> {
        let database_url = config.database_url.as_str();
        if database_url.is_empty() {
            return Err(LinkError::database_config("database.database_url is not set"));
        }

        let retry_config = retry::RetryConfig {
            max_retries: config.retry_count,
            base_delay_ms: config.retry_base_delay_ms,
            max_delay_ms: config.retry_max_delay_ms,
        };

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url, config.timeout).await?
        } else {
            connect_generic(database_url, backend_name, config.pool_size, config.timeout).await?
        };

        warn!("{} storage connected.", backend_name.to_uppercase());
        Ok(Self::from_connection(db, backend_name, retry_config))
    }

    /// 包装已有连接（测试或嵌入场景）
    pub fn from_connection(
        db: DatabaseConnection,
        backend_name: &str,
        retry_config: retry::RetryConfig,
    ) -> Self {
        Self {
            db,
            backend_name: backend_name.to_string(),
            retry_config,
        }
    }
}

#[async_trait]
impl LinkRepository for SeaOrmStorage {
    async fn ensure_schema(&self) -> Result<()> {
        ensure_schema(&self.db, self.retry_config).await
    }

    async fn insert(&self, link: NewLink) -> Result<Link> {
        self.insert_link(link).await
    }

    async fn get(&self, id: LinkId) -> Result<Option<Link>> {
        self.get_link(id).await
    }

    async fn remove(&self, id: LinkId) -> Result<()> {
        self.remove_link(id).await
    }

    async fn list_all(&self) -> Result<Vec<Link>> {
        self.load_links(None).await
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Link>> {
        self.load_links(Some(category)).await
    }

    async fn category_counts(&self) -> Result<Vec<CategoryCount>> {
        self.load_category_counts().await
    }

    async fn count(&self) -> Result<u64> {
        self.count_links().await
    }

    async fn recent(&self, limit: u64) -> Result<Vec<Link>> {
        self.load_recent(limit).await
    }

    async fn close(&self) -> Result<()> {
        self.db.close_by_ref().await?;
        Ok(())
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}
