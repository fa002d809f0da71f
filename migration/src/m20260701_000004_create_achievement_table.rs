use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Achievement::Table)
                    .if_not_exists()
                    .col(pk_auto(Achievement::Id))
                    .col(string_uniq(Achievement::Name))
                    .col(string(Achievement::Description))
                    .col(string(Achievement::Icon))
                    .col(string(Achievement::RequirementKind))
                    .col(integer(Achievement::RequirementValue))
                    .col(integer(Achievement::RewardCoins))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Achievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Achievement {
    Table,
    Id,
    Name,
    Description,
    Icon,
    RequirementKind,
    RequirementValue,
    RewardCoins,
}
