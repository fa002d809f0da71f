use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{
        clan::{add_member, create_clan},
        player::PlayerFactory,
    },
};

use crate::data::clan::ClanRepository;

mod get_summaries;
