// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "culture_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub culture_topic_id: Uuid,
    pub title_id: String,
    pub title_su: String,
    pub title_en: String,
    #[sea_orm(column_type = "Text")]
    pub content_id: String,
    #[sea_orm(column_type = "Text")]
    pub content_su: String,
    #[sea_orm(column_type = "Text")]
    pub content_en: String,
    pub image_key: Option<String>,
    pub video_url: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::culture_topic::Entity",
        from = "Column::CultureTopicId",
        to = "super::culture_topic::Column::Id"
    )]
    CultureTopic,
}

impl Related<super::culture_topic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CultureTopic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
