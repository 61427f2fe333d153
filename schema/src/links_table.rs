use sea_orm_migration::prelude::*;

/// Longest URL the relational schema can hold.
pub const URL_MAX_LENGTH: u32 = 2048;

/// 创建 links 表及其索引（幂等，可并发重复调用，不会删除数据）
pub async fn ensure_links_schema(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    // UNIQUE 约束与表同时创建，保证不存在"有表无约束"的窗口
    manager
        .create_table(
            Table::create()
                .table(Links::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Links::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(Links::Url)
                        .string_len(URL_MAX_LENGTH)
                        .not_null()
                        .unique_key(),
                )
                .col(ColumnDef::new(Links::Category).string().not_null())
                .col(
                    ColumnDef::new(Links::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;

    // 分类过滤索引
    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name("idx_links_category")
                .table(Links::Table)
                .col(Links::Category)
                .to_owned(),
        )
        .await?;

    // 创建时间索引（列表排序、最近链接）
    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name("idx_links_created_at")
                .table(Links::Table)
                .col(Links::CreatedAt)
                .to_owned(),
        )
        .await?;

    Ok(())
}

#[derive(DeriveIden)]
enum Links {
    Table,
    Id,
    Url,
    Category,
    CreatedAt,
}
