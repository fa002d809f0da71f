use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_player_table::Player,
    m20260701_000006_create_custom_title_table::CustomTitle,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerTitle::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerTitle::Id))
                    .col(integer(PlayerTitle::PlayerId))
                    .col(integer(PlayerTitle::TitleId))
                    .col(boolean(PlayerTitle::Equipped).default(false))
                    .col(
                        timestamp(PlayerTitle::AcquiredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_title_player_id")
                            .from(PlayerTitle::Table, PlayerTitle::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_title_title_id")
                            .from(PlayerTitle::Table, PlayerTitle::TitleId)
                            .to(CustomTitle::Table, CustomTitle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerTitle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerTitle {
    Table,
    Id,
    PlayerId,
    TitleId,
    Equipped,
    AcquiredAt,
}
