use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "player_title")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub title_id: i32,
    pub equipped: bool,
    pub acquired_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::custom_title::Entity",
        from = "Column::TitleId",
        to = "super::custom_title::Column::Id",
        on_delete = "Cascade"
    )]
    CustomTitle,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::custom_title::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomTitle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
