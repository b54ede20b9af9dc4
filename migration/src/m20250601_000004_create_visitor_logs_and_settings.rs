use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(VisitorLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(VisitorLogs::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(VisitorLogs::LearnerId).uuid().not_null())
                    .col(ColumnDef::new(VisitorLogs::TopicId).uuid().not_null())
                    .col(
                        ColumnDef::new(VisitorLogs::VisitedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Statistics queries filter by visit time and group by topic
        manager
            .create_index(
                Index::create()
                    .name("idx_visitor_logs_visited_at")
                    .table(VisitorLogs::Table)
                    .col(VisitorLogs::VisitedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_visitor_logs_topic_id")
                    .table(VisitorLogs::Table)
                    .col(VisitorLogs::TopicId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_visitor_logs_learner_id")
                    .table(VisitorLogs::Table)
                    .col(VisitorLogs::LearnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Settings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Settings::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Settings::Value).text().not_null())
                    .col(ColumnDef::new(Settings::UpdatedBy).uuid().null())
                    .col(
                        ColumnDef::new(Settings::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Settings::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(VisitorLogs::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum VisitorLogs {
    Table,
    Id,
    LearnerId,
    TopicId,
    VisitedAt,
}

#[derive(DeriveIden)]
enum Settings {
    Table,
    Key,
    Value,
    UpdatedBy,
    UpdatedAt,
}
