//! LinkStore over SeaORM/SQLite
//!
//! 每个测试使用独立的临时数据库文件。

mod common;

use std::sync::Arc;

use linkcollector::config::{CategoryMode, DatabaseConfig, StaticConfig};
use linkcollector::errors::LinkError;
use linkcollector::runtime::lifetime::shutdown::close_store;
use linkcollector::runtime::lifetime::startup::prepare_store;
use linkcollector::services::LinkStore;
use linkcollector::storage::{LinkRepository, SeaOrmStorage, StorageFactory};
use tempfile::TempDir;

fn sqlite_config(temp_dir: &TempDir) -> StaticConfig {
    let db_path = temp_dir.path().join("links.db");
    StaticConfig {
        database: DatabaseConfig {
            database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
            ..DatabaseConfig::default()
        },
        ..StaticConfig::default()
    }
}

/// 创建临时 SQLite 数据库的 LinkStore（已建表）
async fn create_temp_store() -> (Arc<LinkStore>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = sqlite_config(&temp_dir);
    let store = prepare_store(&config)
        .await
        .expect("Failed to prepare store");
    (store, temp_dir)
}

#[tokio::test]
async fn test_dedup_scenario() {
    let (store, _dir) = create_temp_store().await;
    common::check_dedup_scenario(&store).await;
}

#[tokio::test]
async fn test_duplicate_across_categories() {
    let (store, _dir) = create_temp_store().await;
    common::check_duplicate_across_categories(&store).await;
}

#[tokio::test]
async fn test_url_stored_verbatim() {
    let (store, _dir) = create_temp_store().await;
    common::check_url_is_not_normalized(&store).await;
}

#[tokio::test]
async fn test_newest_first() {
    let (store, _dir) = create_temp_store().await;
    common::check_newest_first(&store).await;
}

#[tokio::test]
async fn test_category_filter() {
    let (store, _dir) = create_temp_store().await;
    common::check_category_filter(&store).await;
}

#[tokio::test]
async fn test_filter_union_and_stats_consistency() {
    let (store, _dir) = create_temp_store().await;
    common::check_filter_union_and_stats_consistency(&store).await;
}

#[tokio::test]
async fn test_category_counts() {
    let (store, _dir) = create_temp_store().await;
    common::check_category_counts(&store).await;
}

#[tokio::test]
async fn test_stats_recent_links() {
    let (store, _dir) = create_temp_store().await;
    common::check_stats_recent_links(&store).await;
}

#[tokio::test]
async fn test_empty_store() {
    let (store, _dir) = create_temp_store().await;
    common::check_empty_store(&store).await;
}

#[tokio::test]
async fn test_ensure_schema_is_idempotent() {
    let (store, _dir) = create_temp_store().await;
    common::check_ensure_schema_is_idempotent(&store).await;
}

#[tokio::test]
async fn test_validation() {
    let (store, _dir) = create_temp_store().await;
    common::check_validation_rejects_before_storage(&store).await;
}

#[tokio::test]
async fn test_get_and_remove() {
    let (store, _dir) = create_temp_store().await;
    common::check_get_and_remove(&store).await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicates() {
    let (store, _dir) = create_temp_store().await;
    common::check_concurrent_duplicates(store).await;
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = sqlite_config(&temp_dir);

    let store = prepare_store(&config).await.unwrap();
    let link = store.add("https://persist.example/1", "website").await.unwrap();
    store.close().await.unwrap();
    drop(store);

    let reopened = prepare_store(&config).await.unwrap();
    assert_eq!(reopened.list(None).await.unwrap(), vec![link]);
}

/// 关闭后连接池不可用，server 必须先停止再关闭存储
#[tokio::test]
async fn test_store_rejects_operations_after_close() {
    let (store, _dir) = create_temp_store().await;
    store.add("https://x.com/before", "x").await.unwrap();

    close_store(&store).await;

    let err = store.add("https://x.com/after", "x").await.unwrap_err();
    assert!(matches!(err, LinkError::StorageUnavailable(_)), "{:?}", err);
    assert!(matches!(
        store.count().await,
        Err(LinkError::StorageUnavailable(_))
    ));
}

#[tokio::test]
async fn test_factory_infers_sqlite() {
    let temp_dir = TempDir::new().unwrap();
    let config = sqlite_config(&temp_dir);

    let repo = StorageFactory::create(&config.database).await.unwrap();
    assert_eq!(repo.backend_name(), "sqlite");
}

#[tokio::test]
async fn test_factory_rejects_unknown_backend() {
    let config = DatabaseConfig {
        database_url: "links.db".to_string(),
        backend: Some("cassandra".to_string()),
        ..DatabaseConfig::default()
    };
    let err = StorageFactory::create(&config).await.err().unwrap();
    assert!(matches!(err, LinkError::DatabaseConfig(_)));
}

#[tokio::test]
async fn test_operations_before_schema_fail_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let config = sqlite_config(&temp_dir);

    let storage = SeaOrmStorage::new(&config.database, "sqlite").await.unwrap();
    let err = storage.list_all().await.unwrap_err();
    assert!(matches!(err, LinkError::StorageUnavailable(_)));

    storage.ensure_schema().await.unwrap();
    assert!(storage.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_closed_category_mode() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = sqlite_config(&temp_dir);
    config.links.category_mode = CategoryMode::Closed;

    let store = prepare_store(&config).await.unwrap();
    store.add("https://closed.example/1", "youtube").await.unwrap();
    let err = store
        .add("https://closed.example/2", "podcasts")
        .await
        .unwrap_err();
    assert!(matches!(err, LinkError::Validation(_)));
}

#[tokio::test]
async fn test_allowed_schemes() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = sqlite_config(&temp_dir);
    config.links.allowed_schemes = vec!["https".to_string()];

    let store = prepare_store(&config).await.unwrap();
    store.add("https://ok.example/", "x").await.unwrap();
    assert!(matches!(
        store.add("ftp://files.example/a", "x").await,
        Err(LinkError::Validation(_))
    ));
}

#[tokio::test]
async fn test_category_length_limit() {
    let temp_dir = TempDir::new().unwrap();
    let mut config = sqlite_config(&temp_dir);
    config.links.max_category_length = 4;

    let store = prepare_store(&config).await.unwrap();
    store.add("https://len.example/1", "abcd").await.unwrap();
    assert!(matches!(
        store.add("https://len.example/2", "abcde").await,
        Err(LinkError::Validation(_))
    ));
}
