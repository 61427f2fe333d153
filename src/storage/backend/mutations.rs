//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use sea_orm::{ActiveModelTrait, EntityTrait};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{model_to_link, new_link_to_active_model};
use super::retry;
use crate::errors::{LinkError, Result};
use crate::storage::{Link, LinkId, NewLink};

use schema::entities::link;

impl SeaOrmStorage {
    /// 插入链接，url 唯一性由数据库唯一约束保证
    pub(super) async fn insert_link(&self, new_link: NewLink) -> Result<Link> {
        let db = &self.db;
        let active = new_link_to_active_model(&new_link);

        let model = retry::with_retry_if(
            "insert",
            self.retry_config,
            retry::is_retryable_write_error,
            || {
                let active = active.clone();
                async move { active.insert(db).await }
            },
        )
        .await
        .map_err(|e| match LinkError::from(e) {
            LinkError::Duplicate(_) => LinkError::duplicate(format!(
                "This link already exists: {}",
                new_link.url
            )),
            other => other,
        })?;

        let link = model_to_link(model);
        info!("Link added: #{} {} [{}]", link.id, link.url, link.category);
        Ok(link)
    }

    pub(super) async fn remove_link(&self, id: LinkId) -> Result<()> {
        let not_found = || LinkError::not_found(format!("Link not found: {}", id));
        let Ok(key) = i32::try_from(id) else {
            return Err(not_found());
        };
        let db = &self.db;

        // 重复执行的删除会把自己的成功报告为 NotFound，按写入规则重试
        let result = retry::with_retry_if(
            &format!("remove({})", id),
            self.retry_config,
            retry::is_retryable_write_error,
            || async { link::Entity::delete_by_id(key).exec(db).await },
        )
        .await?;

        if result.rows_affected == 0 {
            return Err(not_found());
        }

        info!("Link deleted: #{}", id);
        Ok(())
    }
}
