use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::config::DatabaseConfig;
use crate::errors::{LinkError, Result};

pub mod backend;
pub mod models;
#[cfg(feature = "sled")]
pub mod sled_backend;

pub use backend::SeaOrmStorage;
pub use models::{CategoryCount, Link, LinkId, LinkStats, NewLink};

/// 存储后端抽象
///
/// 唯一性由存储层原子保证（唯一索引 / 事务），调用方不做先查后写。
/// 所有列表类查询都按 created_at 降序、id 降序返回。
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// 幂等地创建表/集合、url 唯一约束和 category 索引
    async fn ensure_schema(&self) -> Result<()>;

    /// 插入新链接；url 已存在时返回 `LinkError::Duplicate`
    async fn insert(&self, link: NewLink) -> Result<Link>;

    async fn get(&self, id: LinkId) -> Result<Option<Link>>;

    /// 删除链接；不存在时返回 `LinkError::NotFound`
    async fn remove(&self, id: LinkId) -> Result<()>;

    async fn list_all(&self) -> Result<Vec<Link>>;

    async fn list_by_category(&self, category: &str) -> Result<Vec<Link>>;

    /// 每个分类及其数量，按分类名升序
    async fn category_counts(&self) -> Result<Vec<CategoryCount>>;

    async fn count(&self) -> Result<u64>;

    async fn recent(&self, limit: u64) -> Result<Vec<Link>>;

    /// 关闭前落盘/释放连接
    async fn close(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &str;
}

/// 从数据库 URL 推断后端类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sled://") {
        Ok("sled".to_string())
    } else if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(LinkError::database_config(format!(
            "Cannot infer storage backend from URL: {}. Supported: sqlite://, mysql://, mariadb://, postgres://, sled://",
            database_url
        )))
    }
}

/// 规范化 backend 名称
pub fn normalize_backend_name(backend: &str) -> String {
    match backend.to_lowercase().as_str() {
        "mariadb" => "mysql".to_string(),
        "postgresql" => "postgres".to_string(),
        other => other.to_string(),
    }
}

pub struct StorageFactory;

impl StorageFactory {
    /// 按配置创建存储后端（不会自动建表，见 `LinkRepository::ensure_schema`）
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<dyn LinkRepository>> {
        let database_url = config.database_url.as_str();
        if database_url.is_empty() {
            return Err(LinkError::database_config("database.database_url is not set"));
        }

        let backend = match config.backend.as_deref().filter(|b| !b.is_empty()) {
            Some(explicit) => normalize_backend_name(explicit),
            None => infer_backend_from_url(database_url)?,
        };

        match backend.as_str() {
            "sqlite" | "mysql" | "postgres" => {
                let storage = SeaOrmStorage::new(config, &backend).await?;
                Ok(Arc::new(storage) as Arc<dyn LinkRepository>)
            }
            #[cfg(feature = "sled")]
            "sled" => {
                let path = database_url.strip_prefix("sled://").unwrap_or(database_url);
                let storage = sled_backend::SledStorage::open(path)?;
                Ok(Arc::new(storage) as Arc<dyn LinkRepository>)
            }
            _ => {
                error!("Unknown storage backend: {}", backend);
                Err(LinkError::database_config(format!(
                    "Unknown storage backend: {}. Supported: sqlite, mysql, mariadb, postgres{}",
                    backend,
                    if cfg!(feature = "sled") { ", sled" } else { "" }
                )))
            }
        }
    }
}
