use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_player_table::Player, m20260706_000018_create_badge_table::Badge,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerBadge::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerBadge::Id))
                    .col(integer(PlayerBadge::PlayerId))
                    .col(integer(PlayerBadge::BadgeId))
                    .col(
                        timestamp(PlayerBadge::AwardedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_badge_player_id")
                            .from(PlayerBadge::Table, PlayerBadge::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_badge_badge_id")
                            .from(PlayerBadge::Table, PlayerBadge::BadgeId)
                            .to(Badge::Table, Badge::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerBadge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerBadge {
    Table,
    Id,
    PlayerId,
    BadgeId,
    AwardedAt,
}
