use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomTitle::Table)
                    .if_not_exists()
                    .col(pk_auto(CustomTitle::Id))
                    .col(string_uniq(CustomTitle::Name))
                    .col(string(CustomTitle::DisplayText))
                    .col(string(CustomTitle::Color))
                    .col(integer(CustomTitle::Price))
                    .col(string(CustomTitle::Rarity))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomTitle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CustomTitle {
    Table,
    Id,
    Name,
    DisplayText,
    Color,
    Price,
    Rarity,
}
