//! Achievement entity with an unlock requirement and reward.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "achievement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub icon: String,
    pub requirement_kind: String,
    pub requirement_value: i32,
    pub reward_coins: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_achievement::Entity")]
    PlayerAchievement,
}

impl Related<super::player_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerAchievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
