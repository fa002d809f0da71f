use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "gradient_theme")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub start_color: String,
    pub end_color: String,
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::player_gradient_setting::Entity")]
    PlayerGradientSetting,
}

impl Related<super::player_gradient_setting::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayerGradientSetting.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
