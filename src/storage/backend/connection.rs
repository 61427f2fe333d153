use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use schema::SchemaManager;
use tracing::{debug, info, warn};

use super::retry;
use crate::errors::{LinkError, Result};

/// 连接 SQLite 数据库（带自动创建和性能优化）
pub async fn connect_sqlite(database_url: &str, timeout_secs: u64) -> Result<DatabaseConnection> {
    use sea_orm::SqlxSqliteConnector;
    use sea_orm::sqlx::sqlite::{
        SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
    };
    use std::str::FromStr;

    let opt = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| LinkError::database_config(format!("Invalid SQLite URL: {}", e)))?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .pragma("cache_size", "-16000")
        .pragma("temp_store", "memory");

    let pool = SqlitePoolOptions::new()
        .acquire_timeout(Duration::from_secs(timeout_secs.max(1)))
        .connect_with(opt)
        .await
        .map_err(|e| {
            LinkError::storage_unavailable(format!("Cannot connect to SQLite database: {}", e))
        })?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// 连接通用数据库（MySQL/PostgreSQL）
pub async fn connect_generic(
    database_url: &str,
    backend_name: &str,
    pool_size: u32,
    timeout_secs: u64,
) -> Result<DatabaseConnection> {
    // sqlx 不识别 mariadb:// scheme
    let database_url = match database_url.strip_prefix("mariadb://") {
        Some(rest) => format!("mysql://{}", rest),
        None => database_url.to_owned(),
    };
    let timeout = Duration::from_secs(timeout_secs.max(1));

    let mut opt = ConnectOptions::new(database_url);
    opt.max_connections(pool_size.max(1))
        .min_connections(pool_size.clamp(1, 5))
        .connect_timeout(timeout)
        .acquire_timeout(timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(3600))
        .sqlx_logging(false);

    Database::connect(opt).await.map_err(|e| {
        LinkError::storage_unavailable(format!(
            "Cannot connect to {} database: {}",
            backend_name.to_uppercase(),
            e
        ))
    })
}

/// 建表与索引
///
/// 多个进程同时启动时，PostgreSQL 的 `CREATE TABLE IF NOT EXISTS` 可能因系统表
/// 竞争而失败；此时表已由另一方创建，再执行一次即可收敛。
pub async fn ensure_schema(db: &DatabaseConnection, retry_config: retry::RetryConfig) -> Result<()> {
    let manager = SchemaManager::new(db);
    let manager_ref = &manager;

    let first = retry::with_retry("ensure_schema", retry_config, move || async move {
        schema::ensure_links_schema(manager_ref).await
    })
    .await;

    match first {
        Ok(()) => {}
        Err(e) => {
            let table_exists = manager.has_table("links").await.unwrap_or(false);
            if !table_exists {
                return Err(LinkError::storage_unavailable(format!(
                    "Schema setup failed: {}",
                    e
                )));
            }
            debug!("Schema setup raced with another writer: {}", e);
            warn!("Links table created concurrently, re-running schema setup");
            schema::ensure_links_schema(&manager)
                .await
                .map_err(|e| LinkError::storage_unavailable(format!("Schema setup failed: {}", e)))?;
        }
    }

    info!("Links schema is ready");
    Ok(())
}
