//! Shop item entity purchasable with in-game coins.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "shop_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: i32,
    pub available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::shop_purchase::Entity")]
    ShopPurchase,
}

impl Related<super::shop_purchase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShopPurchase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
