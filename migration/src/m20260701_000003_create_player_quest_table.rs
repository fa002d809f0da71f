use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_player_table::Player, m20260701_000002_create_quest_table::Quest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PlayerQuest::Table)
                    .if_not_exists()
                    .col(pk_auto(PlayerQuest::Id))
                    .col(integer(PlayerQuest::PlayerId))
                    .col(integer(PlayerQuest::QuestId))
                    .col(integer(PlayerQuest::Progress).default(0))
                    .col(boolean(PlayerQuest::Completed).default(false))
                    .col(timestamp_null(PlayerQuest::CompletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_quest_player_id")
                            .from(PlayerQuest::Table, PlayerQuest::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_player_quest_quest_id")
                            .from(PlayerQuest::Table, PlayerQuest::QuestId)
                            .to(Quest::Table, Quest::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlayerQuest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PlayerQuest {
    Table,
    Id,
    PlayerId,
    QuestId,
    Progress,
    Completed,
    CompletedAt,
}
