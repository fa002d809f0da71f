//! Clan factory for creating test clans and memberships.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a clan led by the given player.
///
/// The clan gets a unique name and tag; the leader is not automatically
/// added as a member, use [`add_member`] for that.
///
/// # Arguments
/// - `db` - Database connection
/// - `leader_id` - Id of an existing player entity
///
/// # Returns
/// - `Ok(Model)` - The created clan entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_clan(
    db: &DatabaseConnection,
    leader_id: i32,
) -> Result<entity::clan::Model, DbErr> {
    let id = next_id();
    entity::clan::ActiveModel {
        name: ActiveValue::Set(format!("Clan {id}")),
        tag: ActiveValue::Set(format!("C{id}")),
        description: ActiveValue::Set(None),
        leader_id: ActiveValue::Set(leader_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds a player to a clan with the given role.
///
/// # Arguments
/// - `db` - Database connection
/// - `clan_id` - Id of an existing clan entity
/// - `player_id` - Id of an existing player entity
/// - `role` - Membership role, e.g. `"member"` or `"officer"`
///
/// # Returns
/// - `Ok(Model)` - The created membership entity
/// - `Err(DbErr)` - Database error during creation
pub async fn add_member(
    db: &DatabaseConnection,
    clan_id: i32,
    player_id: i32,
    role: &str,
) -> Result<entity::clan_member::Model, DbErr> {
    entity::clan_member::ActiveModel {
        clan_id: ActiveValue::Set(clan_id),
        player_id: ActiveValue::Set(player_id),
        role: ActiveValue::Set(role.to_string()),
        joined_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
