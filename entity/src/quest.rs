//! Quest entity describing daily and weekly objectives.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "quest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub quest_type: String,
    pub target_value: i32,
    pub reward_coins: i32,
    pub reward_experience: i32,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_quest::Entity")]
    PlayerQuest,
}

impl Related<super::player_quest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerQuest.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
