use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string_uniq(Player::Username))
                    .col(integer(Player::Kills).default(0))
                    .col(integer(Player::Deaths).default(0))
                    .col(integer(Player::FinalKills).default(0))
                    .col(integer(Player::BedsBroken).default(0))
                    .col(integer(Player::Wins).default(0))
                    .col(integer(Player::Losses).default(0))
                    .col(integer(Player::Winstreak).default(0))
                    .col(integer(Player::BestWinstreak).default(0))
                    .col(integer(Player::Coins).default(0))
                    .col(integer(Player::Experience).default(0))
                    .col(
                        timestamp(Player::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Username,
    Kills,
    Deaths,
    FinalKills,
    BedsBroken,
    Wins,
    Losses,
    Winstreak,
    BestWinstreak,
    Coins,
    Experience,
    CreatedAt,
}
