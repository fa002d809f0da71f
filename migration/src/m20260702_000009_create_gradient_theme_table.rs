use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GradientTheme::Table)
                    .if_not_exists()
                    .col(pk_auto(GradientTheme::Id))
                    .col(string_uniq(GradientTheme::Name))
                    .col(string(GradientTheme::StartColor))
                    .col(string(GradientTheme::EndColor))
                    .col(integer(GradientTheme::Price))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GradientTheme::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GradientTheme {
    Table,
    Id,
    Name,
    StartColor,
    EndColor,
    Price,
}
