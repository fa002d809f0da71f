use sea_orm_migration::{prelude::*, schema::*};

use super::m20260701_000001_create_player_table::Player;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Clan::Table)
                    .if_not_exists()
                    .col(pk_auto(Clan::Id))
                    .col(string_uniq(Clan::Name))
                    .col(string_uniq(Clan::Tag))
                    .col(text_null(Clan::Description))
                    .col(integer(Clan::LeaderId))
                    .col(
                        timestamp(Clan::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_clan_leader_id")
                            .from(Clan::Table, Clan::LeaderId)
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
            .drop_table(Table::drop().table(Clan::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Clan {
    Table,
    Id,
    Name,
    Tag,
    Description,
    LeaderId,
    CreatedAt,
}
