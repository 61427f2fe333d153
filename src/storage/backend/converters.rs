use schema::entities::link;

use crate::storage::{Link, NewLink};

/// 将 Sea-ORM Model 转换为 Link
pub fn model_to_link(model: link::Model) -> Link {
    Link {
        id: i64::from(model.id),
        url: model.url,
        category: model.category,
        created_at: model.created_at,
    }
}

/// 将 NewLink 转换为 ActiveModel（id 由数据库分配）
pub fn new_link_to_active_model(link: &NewLink) -> link::ActiveModel {
    use sea_orm::ActiveValue::*;

    link::ActiveModel {
        id: NotSet,
        url: Set(link.url.clone()),
        category: Set(link.category.clone()),
        created_at: Set(link.created_at),
    }
}
