use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_player_table::Player,
    m20260701_000004_create_achievement_table::Achievement,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerAchievement::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerAchievement::Id))
                    .col(integer(PlayerAchievement::PlayerId))
                    .col(integer(PlayerAchievement::AchievementId))
                    .col(
                        timestamp(PlayerAchievement::UnlockedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_achievement_player_id")
                            .from(PlayerAchievement::Table, PlayerAchievement::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_achievement_achievement_id")
                            .from(PlayerAchievement::Table, PlayerAchievement::AchievementId)
                            .to(Achievement::Table, Achievement::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerAchievement::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerAchievement {
    Table,
    Id,
    PlayerId,
    AchievementId,
    UnlockedAt,
}
