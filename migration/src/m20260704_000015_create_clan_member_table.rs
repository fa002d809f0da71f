use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260701_000001_create_player_table::Player, m20260704_000014_create_clan_table::Clan,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ClanMember::Table)
                    .if_not_exists()
                    .col(pk_auto(ClanMember::Id))
                    .col(integer(ClanMember::ClanId))
                    .col(integer(ClanMember::PlayerId))
                    .col(string(ClanMember::Role))
                    .col(
                        timestamp(ClanMember::JoinedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clan_member_clan_id")
                            .from(ClanMember::Table, ClanMember::ClanId)
                            .to(Clan::Table, Clan::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clan_member_player_id")
                            .from(ClanMember::Table, ClanMember::PlayerId)
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
            .drop_table(Table::drop().table(ClanMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ClanMember {
    Table,
    Id,
    ClanId,
    PlayerId,
    Role,
    JoinedAt,
}
