use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_player_table::Player,
    m20260705_000016_create_tournament_table::Tournament,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TournamentParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(TournamentParticipant::Id))
                    .col(integer(TournamentParticipant::TournamentId))
                    .col(integer(TournamentParticipant::PlayerId))
                    .col(integer(TournamentParticipant::Score).default(0))
                    .col(
                        timestamp(TournamentParticipant::RegisteredAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_participant_tournament_id")
                            .from(
                                TournamentParticipant::Table,
                                TournamentParticipant::TournamentId,
                            )
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tournament_participant_player_id")
                            .from(TournamentParticipant::Table, TournamentParticipant::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TournamentParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TournamentParticipant {
    Table,
    Id,
    TournamentId,
    PlayerId,
    Score,
    RegisteredAt,
}
