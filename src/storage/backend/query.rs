//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{
    ColumnTrait, EntityTrait, ExprTrait, FromQueryResult, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use tracing::debug;

use super::{SeaOrmStorage, retry};
use super::converters::model_to_link;
use crate::errors::Result;
use crate::storage::{CategoryCount, Link, LinkId};

use schema::entities::link;

/// 分类聚合查询结果
#[derive(Debug, FromQueryResult)]
struct CategoryCountRow {
    category: String,
    count: i64,
}

/// 统一排序：created_at 降序，同一时间按 id 降序
fn newest_first(select: Select<link::Entity>) -> Select<link::Entity> {
    select
        .order_by_desc(link::Column::CreatedAt)
        .order_by_desc(link::Column::Id)
}

impl SeaOrmStorage {
    pub(super) async fn get_link(&self, id: LinkId) -> Result<Option<Link>> {
        // 超出 i32 范围的 id 不可能存在
        let Ok(id) = i32::try_from(id) else {
            return Ok(None);
        };
        let db = &self.db;

        let model = retry::with_retry(&format!("get({})", id), self.retry_config, || async {
            link::Entity::find_by_id(id).one(db).await
        })
        .await?;

        Ok(model.map(model_to_link))
    }

    pub(super) async fn load_links(&self, category: Option<&str>) -> Result<Vec<Link>> {
        let db = &self.db;

        let models = retry::with_retry("load_links", self.retry_config, || async {
            let mut select = link::Entity::find();
            if let Some(category) = category {
                select = select.filter(link::Column::Category.eq(category));
            }
            newest_first(select).all(db).await
        })
        .await?;

        debug!(
            "Loaded {} links (category filter: {:?})",
            models.len(),
            category
        );
        Ok(models.into_iter().map(model_to_link).collect())
    }

    pub(super) async fn load_recent(&self, limit: u64) -> Result<Vec<Link>> {
        let db = &self.db;

        let models = retry::with_retry("load_recent", self.retry_config, || async {
            newest_first(link::Entity::find())
                .limit(limit)
                .all(db)
                .await
        })
        .await?;

        Ok(models.into_iter().map(model_to_link).collect())
    }

    pub(super) async fn load_category_counts(&self) -> Result<Vec<CategoryCount>> {
        let db = &self.db;

        let rows = retry::with_retry("category_counts", self.retry_config, || async {
            link::Entity::find()
                .select_only()
                .column(link::Column::Category)
                .column_as(link::Column::Id.count(), "count")
                .group_by(link::Column::Category)
                .order_by_asc(link::Column::Category)
                .into_model::<CategoryCountRow>()
                .all(db)
                .await
        })
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CategoryCount::new(row.category, Ord::max(row.count, 0) as u64))
            .collect())
    }

    pub(super) async fn count_links(&self) -> Result<u64> {
        let db = &self.db;

        let total = retry::with_retry("count", self.retry_config, || async {
            link::Entity::find().count(db).await
        })
        .await?;

        Ok(total)
    }
}
