use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CursorTheme::Table)
                    .if_not_exists()
                    .col(pk_auto(CursorTheme::Id))
                    .col(string_uniq(CursorTheme::Name))
                    .col(string(CursorTheme::Style))
                    .col(integer(CursorTheme::Price))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CursorTheme::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CursorTheme {
    Table,
    Id,
    Name,
    Style,
    Price,
}
