//! Badge entity for awarded honors displayed on player profiles.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "badge")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub icon: String,
    pub rarity: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_badge::Entity")]
    PlayerBadge,
}

impl Related<super::player_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerBadge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
