use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteTheme::Table)
                    .if_not_exists()
                    .col(pk_auto(SiteTheme::Id))
                    .col(string_uniq(SiteTheme::Name))
                    .col(string(SiteTheme::PrimaryColor))
                    .col(string(SiteTheme::SecondaryColor))
                    .col(string(SiteTheme::AccentColor))
                    .col(boolean(SiteTheme::IsDefault).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteTheme::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiteTheme {
    Table,
    Id,
    Name,
    PrimaryColor,
    SecondaryColor,
    AccentColor,
    IsDefault,
}
