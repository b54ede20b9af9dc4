use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Topics::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Topics::NameId).string().not_null())
                    .col(ColumnDef::new(Topics::NameSu).string().not_null())
                    .col(ColumnDef::new(Topics::NameEn).string().not_null())
                    .col(ColumnDef::new(Topics::DescriptionId).text().null())
                    .col(ColumnDef::new(Topics::DescriptionSu).text().null())
                    .col(ColumnDef::new(Topics::DescriptionEn).text().null())
                    .col(ColumnDef::new(Topics::ImageKey).string().null())
                    .col(
                        ColumnDef::new(Topics::SortOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Topics::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(Topics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Topics::UpdatedAt)
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
                    .table(Entries::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Entries::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Entries::TopicId).uuid().not_null())
                    .col(ColumnDef::new(Entries::WordId).string().not_null())
                    .col(ColumnDef::new(Entries::WordSu).string().not_null())
                    .col(ColumnDef::new(Entries::WordEn).string().not_null())
                    .col(ColumnDef::new(Entries::DescriptionId).text().null())
                    .col(ColumnDef::new(Entries::DescriptionSu).text().null())
                    .col(ColumnDef::new(Entries::DescriptionEn).text().null())
                    .col(ColumnDef::new(Entries::ImageKey).string().null())
                    .col(ColumnDef::new(Entries::AudioIdKey).string().null())
                    .col(ColumnDef::new(Entries::AudioSuKey).string().null())
                    .col(ColumnDef::new(Entries::AudioEnKey).string().null())
                    .col(ColumnDef::new(Entries::CreatedBy).uuid().not_null())
                    .col(
                        ColumnDef::new(Entries::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Entries::UpdatedAt)
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
                    .name("idx_entries_topic_id")
                    .table(Entries::Table)
                    .col(Entries::TopicId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    NameId,
    NameSu,
    NameEn,
    DescriptionId,
    DescriptionSu,
    DescriptionEn,
    ImageKey,
    SortOrder,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Entries {
    Table,
    Id,
    TopicId,
    WordId,
    WordSu,
    WordEn,
    DescriptionId,
    DescriptionSu,
    DescriptionEn,
    ImageKey,
    AudioIdKey,
    AudioSuKey,
    AudioEnKey,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
}
