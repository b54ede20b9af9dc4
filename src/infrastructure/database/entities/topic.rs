// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name_id: String,
    pub name_su: String,
    pub name_en: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_id: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_su: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description_en: Option<String>,
    pub image_key: Option<String>,
    pub sort_order: i32,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::entry::Entity")]
    Entry,
    #[sea_orm(has_many = "super::visitor_log::Entity")]
    VisitorLog,
}

impl Related<super::entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Entry.def()
    }
}

impl Related<super::visitor_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VisitorLog.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
