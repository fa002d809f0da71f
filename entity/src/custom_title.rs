//! Custom title entity for display names shown next to a player.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "custom_title")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub display_text: String,
    pub color: String,
    pub price: i32,
    pub rarity: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_title::Entity")]
    PlayerTitle,
}

impl Related<super::player_title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerTitle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
