//! Player factory for creating test player entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test players with customizable statistics.
///
/// # Example
///
/// ```rust,ignore
/// let player = PlayerFactory::new(&db)
///     .username("Herobrine")
///     .kills(120)
///     .experience(15000)
///     .build()
///     .await?;
/// ```
pub struct PlayerFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    kills: i32,
    deaths: i32,
    final_kills: i32,
    beds_broken: i32,
    wins: i32,
    losses: i32,
    winstreak: i32,
    experience: i32,
}

impl<'a> PlayerFactory<'a> {
    /// Creates a new PlayerFactory with default values.
    ///
    /// Defaults:
    /// - username: `"Player{id}"` where id is auto-incremented
    /// - all statistics: `0`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("Player{id}"),
            kills: 0,
            deaths: 0,
            final_kills: 0,
            beds_broken: 0,
            wins: 0,
            losses: 0,
            winstreak: 0,
            experience: 0,
        }
    }

    /// Sets the username.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the kill count.
    pub fn kills(mut self, kills: i32) -> Self {
        self.kills = kills;
        self
    }

    /// Sets the death count.
    pub fn deaths(mut self, deaths: i32) -> Self {
        self.deaths = deaths;
        self
    }

    /// Sets the final kill count.
    pub fn final_kills(mut self, final_kills: i32) -> Self {
        self.final_kills = final_kills;
        self
    }

    /// Sets the broken bed count.
    pub fn beds_broken(mut self, beds_broken: i32) -> Self {
        self.beds_broken = beds_broken;
        self
    }

    /// Sets the win count.
    pub fn wins(mut self, wins: i32) -> Self {
        self.wins = wins;
        self
    }

    /// Sets the loss count.
    pub fn losses(mut self, losses: i32) -> Self {
        self.losses = losses;
        self
    }

    /// Sets the current winstreak.
    pub fn winstreak(mut self, winstreak: i32) -> Self {
        self.winstreak = winstreak;
        self
    }

    /// Sets the accumulated experience.
    pub fn experience(mut self, experience: i32) -> Self {
        self.experience = experience;
        self
    }

    /// Inserts the player into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created player entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::player::Model, DbErr> {
        entity::player::ActiveModel {
            username: ActiveValue::Set(self.username),
            kills: ActiveValue::Set(self.kills),
            deaths: ActiveValue::Set(self.deaths),
            final_kills: ActiveValue::Set(self.final_kills),
            beds_broken: ActiveValue::Set(self.beds_broken),
            wins: ActiveValue::Set(self.wins),
            losses: ActiveValue::Set(self.losses),
            winstreak: ActiveValue::Set(self.winstreak),
            best_winstreak: ActiveValue::Set(self.winstreak),
            coins: ActiveValue::Set(0),
            experience: ActiveValue::Set(self.experience),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a player with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created player entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_player(db: &DatabaseConnection) -> Result<entity::player::Model, DbErr> {
    PlayerFactory::new(db).build().await
}
