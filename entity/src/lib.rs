//! SeaORM entity definitions for the leaderboard database schema.

pub mod prelude;

pub mod achievement;
pub mod badge;
pub mod clan;
pub mod clan_member;
pub mod cursor_theme;
pub mod custom_title;
pub mod gradient_theme;
pub mod player;
pub mod player_achievement;
pub mod player_badge;
pub mod player_gradient_setting;
pub mod player_quest;
pub mod player_title;
pub mod quest;
pub mod shop_item;
pub mod shop_purchase;
pub mod site_theme;
pub mod tournament;
pub mod tournament_participant;
