use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::StaticConfig;
use crate::services::LinkStore;
use crate::storage::StorageFactory;

/// 准备 LinkStore：连接存储 -> 确保 schema -> 装配校验规则
///
/// 服务器与 CLI 共用；任一步失败都会让进程以非零状态退出
pub async fn prepare_store(config: &StaticConfig) -> Result<Arc<LinkStore>> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let repository = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", repository.backend_name());

    let store = LinkStore::new(repository, &config.links);
    store
        .ensure_schema()
        .await
        .context("Failed to ensure links schema")?;

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );
    Ok(Arc::new(store))
}
