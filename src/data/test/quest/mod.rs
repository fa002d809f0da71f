use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::quest::QuestFactory};

use crate::{data::quest::QuestRepository, model::seed::SeedOutcome};

mod get_active;
mod seed_defaults;
