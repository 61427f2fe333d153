//! sled storage backend
//!
//! 嵌入式文档存储。三棵树：
//! - `links`: id (u64 BE) -> Link JSON
//! - `links_by_url`: url -> id，承担唯一约束
//! - `links_by_category`: len(category) BE + category + id BE -> ()
//!
//! 写操作在一个跨三棵树的事务中完成，sled 事务可串行化，
//! 并发插入同一 url 时只有一个能提交。

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use sled::transaction::{ConflictableTransactionError, TransactionError, Transactional};
use sled::{Db, Tree};
use tracing::{debug, info};

use crate::errors::{LinkError, Result};
use crate::storage::models::newest_first;
use crate::storage::{CategoryCount, Link, LinkId, LinkRepository, NewLink};

const LINKS_TREE: &str = "links";
const URL_INDEX_TREE: &str = "links_by_url";
const CATEGORY_INDEX_TREE: &str = "links_by_category";
const SCHEMA_VERSION_KEY: &[u8] = b"schema_version";
const SCHEMA_VERSION: u32 = 1;

pub struct SledStorage {
    db: Db,
    links: Tree,
    urls: Tree,
    categories: Tree,
}

impl SledStorage {
    /// 打开（或创建）指定目录下的 sled 数据库
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(LinkError::database_config("sled path is empty"));
        }
        let db = sled::open(path).map_err(|e| {
            LinkError::storage_unavailable(format!(
                "Cannot open sled database at {}: {}",
                path.display(),
                e
            ))
        })?;
        info!("SLED storage opened at {}", path.display());
        Self::from_db(db)
    }

    /// 临时数据库，drop 后删除
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db)
    }

    fn from_db(db: Db) -> Result<Self> {
        Ok(Self {
            links: db.open_tree(LINKS_TREE)?,
            urls: db.open_tree(URL_INDEX_TREE)?,
            categories: db.open_tree(CATEGORY_INDEX_TREE)?,
            db,
        })
    }

    fn decode(bytes: &[u8]) -> Result<Link> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn load_by_ids(&self, ids: impl IntoIterator<Item = [u8; 8]>) -> Result<Vec<Link>> {
        let mut links = Vec::new();
        for key in ids {
            if let Some(bytes) = self.links.get(key)? {
                links.push(Self::decode(&bytes)?);
            }
        }
        Ok(links)
    }
}

fn id_key(id: LinkId) -> [u8; 8] {
    (id as u64).to_be_bytes()
}

fn category_prefix(category: &str) -> Vec<u8> {
    let bytes = category.as_bytes();
    let mut prefix = Vec::with_capacity(4 + bytes.len() + 8);
    prefix.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    prefix.extend_from_slice(bytes);
    prefix
}

fn category_key(category: &str, id: LinkId) -> Vec<u8> {
    let mut key = category_prefix(category);
    key.extend_from_slice(&id_key(id));
    key
}

/// 从分类索引键中解析 (category, id key)
fn split_category_key(key: &[u8]) -> Option<(&str, [u8; 8])> {
    let len_bytes: [u8; 4] = key.get(..4)?.try_into().ok()?;
    let len = u32::from_be_bytes(len_bytes) as usize;
    let category = std::str::from_utf8(key.get(4..4 + len)?).ok()?;
    let id: [u8; 8] = key.get(4 + len..)?.try_into().ok()?;
    Some((category, id))
}

fn unwrap_tx<T>(result: std::result::Result<T, TransactionError<LinkError>>) -> Result<T> {
    match result {
        Ok(value) => Ok(value),
        Err(TransactionError::Abort(e)) => Err(e),
        Err(TransactionError::Storage(e)) => Err(e.into()),
    }
}

#[async_trait]
impl LinkRepository for SledStorage {
    async fn ensure_schema(&self) -> Result<()> {
        // open_tree 幂等；这里只补写版本标记
        for name in [LINKS_TREE, URL_INDEX_TREE, CATEGORY_INDEX_TREE] {
            self.db.open_tree(name)?;
        }
        let _ = self.db.compare_and_swap(
            SCHEMA_VERSION_KEY,
            None as Option<&[u8]>,
            Some(&SCHEMA_VERSION.to_be_bytes()[..]),
        )?;
        self.db.flush_async().await?;
        info!("Links schema is ready");
        Ok(())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link> {
        // generate_id 从 0 开始，与关系库自增 id 保持从 1 开始
        let raw_id = self.db.generate_id()?.saturating_add(1);
        let id = LinkId::try_from(raw_id)
            .map_err(|_| LinkError::storage_unavailable("sled id space exhausted"))?;

        let link = Link {
            id,
            url: new_link.url,
            category: new_link.category,
            created_at: new_link.created_at,
        };
        let record = serde_json::to_vec(&link)?;
        let key = id_key(id);
        let cat_key = category_key(&link.category, id);

        let committed = (&self.links, &self.urls, &self.categories).transaction(
            |(links, urls, categories)| {
                if urls.get(link.url.as_bytes())?.is_some() {
                    return Err(ConflictableTransactionError::Abort(LinkError::duplicate(
                        format!("This link already exists: {}", link.url),
                    )));
                }
                urls.insert(link.url.as_bytes(), &key[..])?;
                links.insert(&key[..], record.as_slice())?;
                categories.insert(cat_key.as_slice(), sled::IVec::default())?;
                Ok(())
            },
        );
        unwrap_tx(committed)?;
        self.db.flush_async().await?;

        info!("Link added: #{} {} [{}]", link.id, link.url, link.category);
        Ok(link)
    }

    async fn get(&self, id: LinkId) -> Result<Option<Link>> {
        match self.links.get(id_key(id))? {
            Some(bytes) => Ok(Some(Self::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn remove(&self, id: LinkId) -> Result<()> {
        let key = id_key(id);

        let committed = (&self.links, &self.urls, &self.categories).transaction(
            |(links, urls, categories)| {
                let Some(bytes) = links.remove(&key[..])? else {
                    return Err(ConflictableTransactionError::Abort(LinkError::not_found(
                        format!("Link not found: {}", id),
                    )));
                };
                let link: Link = serde_json::from_slice(&bytes).map_err(|e| {
                    ConflictableTransactionError::Abort(LinkError::from(e))
                })?;
                urls.remove(link.url.as_bytes())?;
                categories.remove(category_key(&link.category, id))?;
                Ok(())
            },
        );
        unwrap_tx(committed)?;
        self.db.flush_async().await?;

        info!("Link deleted: #{}", id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Link>> {
        let mut links = Vec::with_capacity(self.links.len());
        for entry in self.links.iter() {
            let (_, bytes) = entry?;
            links.push(Self::decode(&bytes)?);
        }
        links.sort_by(newest_first);
        Ok(links)
    }

    async fn list_by_category(&self, category: &str) -> Result<Vec<Link>> {
        let prefix = category_prefix(category);
        let mut ids = Vec::new();
        for entry in self.categories.scan_prefix(&prefix) {
            let (key, _) = entry?;
            if let Some((_, id)) = split_category_key(&key) {
                ids.push(id);
            }
        }

        let mut links = self.load_by_ids(ids)?;
        links.sort_by(newest_first);
        debug!("Loaded {} links in category {}", links.len(), category);
        Ok(links)
    }

    async fn category_counts(&self) -> Result<Vec<CategoryCount>> {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for entry in self.categories.iter() {
            let (key, _) = entry?;
            match split_category_key(&key) {
                Some((category, _)) => *counts.entry(category.to_string()).or_default() += 1,
                None => {
                    return Err(LinkError::serialization(
                        "Corrupted category index entry".to_string(),
                    ));
                }
            }
        }

        Ok(counts
            .into_iter()
            .map(|(category, count)| CategoryCount::new(category, count))
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.links.len() as u64)
    }

    async fn recent(&self, limit: u64) -> Result<Vec<Link>> {
        let mut links = self.list_all().await?;
        links.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(links)
    }

    async fn close(&self) -> Result<()> {
        self.db.flush_async().await?;
        Ok(())
    }

    fn backend_name(&self) -> &str {
        "sled"
    }
}
