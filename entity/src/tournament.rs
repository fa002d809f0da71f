//! Tournament entity for scheduled competitive events.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tournament")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub starts_at: DateTime,
    pub ends_at: DateTime,
    pub max_participants: i32,
    pub status: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::tournament_participant::Entity")]
    TournamentParticipant,
}

impl Related<super::tournament_participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TournamentParticipant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
