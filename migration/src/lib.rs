pub use sea_orm_migration::prelude::*;

mod m20260701_000001_create_player_table;
mod m20260701_000002_create_quest_table;
mod m20260701_000003_create_player_quest_table;
mod m20260701_000004_create_achievement_table;
mod m20260701_000005_create_player_achievement_table;
mod m20260701_000006_create_custom_title_table;
mod m20260701_000007_create_player_title_table;
mod m20260702_000008_create_site_theme_table;
mod m20260702_000009_create_gradient_theme_table;
mod m20260702_000010_create_player_gradient_setting_table;
mod m20260702_000011_create_cursor_theme_table;
mod m20260703_000012_create_shop_item_table;
mod m20260703_000013_create_shop_purchase_table;
mod m20260704_000014_create_clan_table;
mod m20260704_000015_create_clan_member_table;
mod m20260705_000016_create_tournament_table;
mod m20260705_000017_create_tournament_participant_table;
mod m20260706_000018_create_badge_table;
mod m20260706_000019_create_player_badge_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260701_000001_create_player_table::Migration),
            Box::new(m20260701_000002_create_quest_table::Migration),
            Box::new(m20260701_000003_create_player_quest_table::Migration),
            Box::new(m20260701_000004_create_achievement_table::Migration),
            Box::new(m20260701_000005_create_player_achievement_table::Migration),
            Box::new(m20260701_000006_create_custom_title_table::Migration),
            Box::new(m20260701_000007_create_player_title_table::Migration),
            Box::new(m20260702_000008_create_site_theme_table::Migration),
            Box::new(m20260702_000009_create_gradient_theme_table::Migration),
            Box::new(m20260702_000010_create_player_gradient_setting_table::Migration),
            Box::new(m20260702_000011_create_cursor_theme_table::Migration),
            Box::new(m20260703_000012_create_shop_item_table::Migration),
            Box::new(m20260703_000013_create_shop_purchase_table::Migration),
            Box::new(m20260704_000014_create_clan_table::Migration),
            Box::new(m20260704_000015_create_clan_member_table::Migration),
            Box::new(m20260705_000016_create_tournament_table::Migration),
            Box::new(m20260705_000017_create_tournament_participant_table::Migration),
            Box::new(m20260706_000018_create_badge_table::Migration),
            Box::new(m20260706_000019_create_player_badge_table::Migration),
        ]
    }
}
