use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::player::PlayerFactory};

use crate::data::player::PlayerRepository;

mod find_by_username;
mod get_leaderboard;
mod get_profile;
mod get_site_statistics;
