// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "culture_topics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name_id: String,
    pub name_su: String,
    pub name_en: String,
    pub image_key: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::culture_entry::Entity")]
    CultureEntry,
}

impl Related<super::culture_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CultureEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
