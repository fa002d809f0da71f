use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "player_gradient_setting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub player_id: i32,
    pub gradient_theme_id: i32,
    pub enabled: bool,
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
        belongs_to = "super::gradient_theme::Entity",
        from = "Column::GradientThemeId",
        to = "super::gradient_theme::Column::Id",
        on_delete = "Cascade"
    )]
    GradientTheme,
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl Related<super::gradient_theme::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GradientTheme.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
