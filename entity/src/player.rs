//! Player entity holding per-player Bedwars statistics and currency.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "player")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    pub kills: i32,
    pub deaths: i32,
    pub final_kills: i32,
    pub beds_broken: i32,
    pub wins: i32,
    pub losses: i32,
    pub winstreak: i32,
    pub best_winstreak: i32,
    pub coins: i32,
    pub experience: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_quest::Entity")]
    PlayerQuest,
    #[sea_orm(has_many = "super::player_achievement::Entity")]
    PlayerAchievement,
    #[sea_orm(has_many = "super::player_title::Entity")]
    PlayerTitle,
    #[sea_orm(has_many = "super::player_gradient_setting::Entity")]
    PlayerGradientSetting,
    #[sea_orm(has_many = "super::shop_purchase::Entity")]
    ShopPurchase,
    #[sea_orm(has_many = "super::clan_member::Entity")]
    ClanMember,
    #[sea_orm(has_many = "super::tournament_participant::Entity")]
    TournamentParticipant,
    #[sea_orm(has_many = "super::player_badge::Entity")]
    PlayerBadge,
}

impl Related<super::player_quest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerQuest.def()
    }
}

impl Related<super::player_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerAchievement.def()
    }
}

impl Related<super::player_badge::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerBadge.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
