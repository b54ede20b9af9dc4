use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CultureTopics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CultureTopics::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CultureTopics::NameId).string().not_null())
                    .col(ColumnDef::new(CultureTopics::NameSu).string().not_null())
                    .col(ColumnDef::new(CultureTopics::NameEn).string().not_null())
                    .col(ColumnDef::new(CultureTopics::ImageKey).string().null())
                    .col(ColumnDef::new(CultureTopics::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(CultureTopics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CultureTopics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CultureEntries::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CultureEntries::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CultureEntries::CultureTopicId).uuid().not_null())
                    .col(ColumnDef::new(CultureEntries::TitleId).string().not_null())
                    .col(ColumnDef::new(CultureEntries::TitleSu).string().not_null())
                    .col(ColumnDef::new(CultureEntries::TitleEn).string().not_null())
                    .col(ColumnDef::new(CultureEntries::ContentId).text().not_null())
                    .col(ColumnDef::new(CultureEntries::ContentSu).text().not_null())
                    .col(ColumnDef::new(CultureEntries::ContentEn).text().not_null())
                    .col(ColumnDef::new(CultureEntries::ImageKey).string().null())
                    .col(ColumnDef::new(CultureEntries::VideoUrl).string().null())
                    .col(ColumnDef::new(CultureEntries::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(CultureEntries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CultureEntries::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_culture_entries_topic_id")
                    .table(CultureEntries::Table)
                    .col(CultureEntries::CultureTopicId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CultureEntries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CultureTopics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CultureTopics {
    Table,
    Id,
    NameId,
    NameSu,
    NameEn,
    ImageKey,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CultureEntries {
    Table,
    Id,
    CultureTopicId,
    TitleId,
    TitleSu,
    TitleEn,
    ContentId,
    ContentSu,
    ContentEn,
    ImageKey,
    VideoUrl,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
