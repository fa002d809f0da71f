//! Clan entity grouping players under a shared tag.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "clan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub tag: String,
    pub description: Option<String>,
    pub leader_id: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::LeaderId",
        to = "super::player::Column::Id",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(has_many = "super::clan_member::Entity")]
    ClanMember,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::clan_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClanMember.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
