use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_player_table::Player,
    m20260702_000009_create_gradient_theme_table::GradientTheme,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerGradientSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerGradientSetting::Id))
                    .col(integer(PlayerGradientSetting::PlayerId))
                    .col(integer(PlayerGradientSetting::GradientThemeId))
                    .col(boolean(PlayerGradientSetting::Enabled).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_gradient_setting_player_id")
                            .from(PlayerGradientSetting::Table, PlayerGradientSetting::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_gradient_setting_gradient_theme_id")
                            .from(
                                PlayerGradientSetting::Table,
                                PlayerGradientSetting::GradientThemeId,
                            )
                            .to(GradientTheme::Table, GradientTheme::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerGradientSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerGradientSetting {
    Table,
    Id,
    PlayerId,
    GradientThemeId,
    Enabled,
}
