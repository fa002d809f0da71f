use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_player_table::Player, m20260703_000012_create_shop_item_table::ShopItem,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopPurchase::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopPurchase::Id))
                    .col(integer(ShopPurchase::PlayerId))
                    .col(integer(ShopPurchase::ShopItemId))
                    .col(integer(ShopPurchase::PricePaid))
                    .col(
                        timestamp(ShopPurchase::PurchasedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_purchase_player_id")
                            .from(ShopPurchase::Table, ShopPurchase::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shop_purchase_shop_item_id")
                            .from(ShopPurchase::Table, ShopPurchase::ShopItemId)
                            .to(ShopItem::Table, ShopItem::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopPurchase::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopPurchase {
    Table,
    Id,
    PlayerId,
    ShopItemId,
    PricePaid,
    PurchasedAt,
}
