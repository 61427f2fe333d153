//! 后端无关的 LinkStore 行为检查
//!
//! sqlite 与 sled 测试共用同一组断言，保证两种存储可互换。

#![allow(dead_code)]

use std::sync::Arc;

use linkcollector::errors::LinkError;
use linkcollector::services::{CategoryOrder, LinkStore};
use linkcollector::storage::CategoryCount;

pub async fn check_dedup_scenario(store: &LinkStore) {
    store.add("https://x.com/1", "website").await.unwrap();
    store.add("https://x.com/2", "website").await.unwrap();

    let err = store.add("https://x.com/1", "other").await.unwrap_err();
    assert!(matches!(err, LinkError::Duplicate(_)), "got {:?}", err);

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.total_links, 2);
    assert_eq!(stats.total_categories, 1);
    assert_eq!(
        stats.category_breakdown,
        vec![CategoryCount::new("website", 2)]
    );
}

pub async fn check_duplicate_across_categories(store: &LinkStore) {
    store.add("https://dup.example/a", "website").await.unwrap();
    let err = store
        .add("https://dup.example/a", "youtube")
        .await
        .unwrap_err();
    assert!(matches!(err, LinkError::Duplicate(_)));

    // 原记录不变
    let links = store.list(None).await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].category, "website");
}

pub async fn check_url_is_not_normalized(store: &LinkStore) {
    store.add("https://x.com/page", "website").await.unwrap();
    store.add("https://x.com/page/", "website").await.unwrap();
    store.add("HTTPS://x.com/page", "website").await.unwrap();
    assert_eq!(store.count().await.unwrap(), 3);
}

pub async fn check_newest_first(store: &LinkStore) {
    let first = store.add("https://a.example/1", "x").await.unwrap();
    let second = store.add("https://a.example/2", "facebook").await.unwrap();
    let third = store.add("https://a.example/3", "x").await.unwrap();

    let all: Vec<_> = store
        .list(None)
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(all, vec![third.id, second.id, first.id]);

    let only_x: Vec<_> = store
        .list(Some("x"))
        .await
        .unwrap()
        .into_iter()
        .map(|l| l.id)
        .collect();
    assert_eq!(only_x, vec![third.id, first.id]);
}

pub async fn check_category_filter(store: &LinkStore) {
    store.add("https://f.example/1", "x").await.unwrap();
    store.add("https://f.example/2", "youtube").await.unwrap();

    assert_eq!(store.list(Some("all")).await.unwrap().len(), 2);
    assert_eq!(store.list(Some("")).await.unwrap().len(), 2);
    assert_eq!(store.list(Some("youtube")).await.unwrap().len(), 1);
    // 大小写敏感
    assert!(store.list(Some("YouTube")).await.unwrap().is_empty());
    assert!(store.list(Some("missing")).await.unwrap().is_empty());
}

/// 各分类列表的并集等于全部列表，且统计与列表一致
pub async fn check_filter_union_and_stats_consistency(store: &LinkStore) {
    for (i, category) in ["x", "youtube", "x", "website", "youtube", "x"]
        .iter()
        .enumerate()
    {
        store
            .add(&format!("https://u.example/{}", i), category)
            .await
            .unwrap();
    }

    let all = store.list(Some("all")).await.unwrap();
    let categories = store.list_categories(CategoryOrder::Name).await.unwrap();

    let mut union = Vec::new();
    for entry in &categories {
        let links = store.list(Some(&entry.category)).await.unwrap();
        assert!(links.iter().all(|l| l.category == entry.category));
        assert_eq!(links.len() as u64, entry.count);
        union.extend(links.into_iter().map(|l| l.id));
    }
    let mut all_ids: Vec<_> = all.iter().map(|l| l.id).collect();
    union.sort_unstable();
    all_ids.sort_unstable();
    assert_eq!(union, all_ids);

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.total_links, all.len() as u64);
    assert_eq!(stats.total_categories, categories.len() as u64);
}

pub async fn check_category_counts(store: &LinkStore) {
    store.add("https://c.example/1", "x").await.unwrap();
    store.add("https://c.example/2", "youtube").await.unwrap();
    store.add("https://c.example/3", "youtube").await.unwrap();
    store.add("https://c.example/4", "facebook").await.unwrap();

    let by_name = store.list_categories(CategoryOrder::Name).await.unwrap();
    assert_eq!(
        by_name,
        vec![
            CategoryCount::new("facebook", 1),
            CategoryCount::new("x", 1),
            CategoryCount::new("youtube", 2),
        ]
    );

    let by_count = store.list_categories(CategoryOrder::Count).await.unwrap();
    assert_eq!(
        by_count,
        vec![
            CategoryCount::new("youtube", 2),
            CategoryCount::new("facebook", 1),
            CategoryCount::new("x", 1),
        ]
    );
}

pub async fn check_stats_recent_links(store: &LinkStore) {
    let mut ids = Vec::new();
    for i in 0..7 {
        let link = store
            .add(&format!("https://r.example/{}", i), "website")
            .await
            .unwrap();
        ids.push(link.id);
    }

    let stats = store.stats().await.unwrap();
    assert_eq!(stats.total_links, 7);
    let recent: Vec<_> = stats.recent_links.iter().map(|l| l.id).collect();
    ids.reverse();
    assert_eq!(recent, ids[..5].to_vec());
}

pub async fn check_empty_store(store: &LinkStore) {
    assert!(store.list(None).await.unwrap().is_empty());
    assert!(
        store
            .list_categories(CategoryOrder::Name)
            .await
            .unwrap()
            .is_empty()
    );
    let stats = store.stats().await.unwrap();
    assert_eq!(stats.total_links, 0);
    assert_eq!(stats.total_categories, 0);
    assert!(stats.category_breakdown.is_empty());
    assert!(stats.recent_links.is_empty());
}

pub async fn check_ensure_schema_is_idempotent(store: &LinkStore) {
    let link = store.add("https://s.example/1", "x").await.unwrap();
    store.ensure_schema().await.unwrap();
    store.ensure_schema().await.unwrap();

    let links = store.list(None).await.unwrap();
    assert_eq!(links, vec![link]);
    // 约束仍然有效
    assert!(matches!(
        store.add("https://s.example/1", "x").await,
        Err(LinkError::Duplicate(_))
    ));
}

pub async fn check_validation_rejects_before_storage(store: &LinkStore) {
    for (url, category) in [
        ("", "x"),
        ("not a url", "x"),
        ("/relative/path", "x"),
        (" https://x.com/ws", "x"),
        ("https://v.example/1", ""),
        ("https://v.example/1", "   "),
        ("https://v.example/1", " x"),
    ] {
        let err = store.add(url, category).await.unwrap_err();
        assert!(
            matches!(err, LinkError::Validation(_)),
            "{:?}/{:?} gave {:?}",
            url,
            category,
            err
        );
    }
    assert_eq!(store.count().await.unwrap(), 0);
}

pub async fn check_get_and_remove(store: &LinkStore) {
    let keep = store.add("https://d.example/keep", "x").await.unwrap();
    let gone = store.add("https://d.example/gone", "youtube").await.unwrap();

    assert_eq!(store.get(gone.id).await.unwrap(), Some(gone.clone()));
    store.remove(gone.id).await.unwrap();
    assert_eq!(store.get(gone.id).await.unwrap(), None);
    assert!(matches!(
        store.remove(gone.id).await,
        Err(LinkError::NotFound(_))
    ));

    // 删除后分类计数与 url 索引同步更新
    let counts = store.list_categories(CategoryOrder::Name).await.unwrap();
    assert_eq!(counts, vec![CategoryCount::new("x", 1)]);
    assert!(store.list(Some("youtube")).await.unwrap().is_empty());
    store.add("https://d.example/gone", "youtube").await.unwrap();

    assert_eq!(store.get(keep.id).await.unwrap(), Some(keep));
}

pub async fn check_concurrent_duplicates(store: Arc<LinkStore>) {
    let mut handles = Vec::new();
    for _ in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.add("https://race.example/1", "website").await
        }));
    }

    let mut ok = 0;
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => ok += 1,
            Err(LinkError::Duplicate(_)) => duplicates += 1,
            Err(e) => panic!("unexpected error: {:?}", e),
        }
    }
    assert_eq!(ok, 1);
    assert_eq!(duplicates, 7);
    assert_eq!(store.count().await.unwrap(), 1);
}
