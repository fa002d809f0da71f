use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopItem::Table)
                    .if_not_exists()
                    .col(pk_auto(ShopItem::Id))
                    .col(string_uniq(ShopItem::Name))
                    .col(string(ShopItem::Description))
                    .col(string(ShopItem::Category))
                    .col(integer(ShopItem::Price))
                    .col(boolean(ShopItem::Available).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ShopItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopItem {
    Table,
    Id,
    Name,
    Description,
    Category,
    Price,
    Available,
}
