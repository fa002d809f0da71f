//! Achievement data repository and default achievement definitions.

use sea_orm::{
    ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder,
};

use crate::model::seed::SeedOutcome;

/// Repository providing database operations for achievements.
pub struct AchievementRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AchievementRepository<'a> {
    /// Creates a new AchievementRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all achievements.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of achievement rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Achievement::find().count(self.db).await
    }

    /// Gets all achievements ordered by their requirement threshold.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Achievements, easiest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::achievement::Model>, DbErr> {
        entity::prelude::Achievement::find()
            .order_by_asc(entity::achievement::Column::RequirementValue)
            .order_by_asc(entity::achievement::Column::Name)
            .all(self.db)
            .await
    }

    /// Populates the default achievement set when the table is empty.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded(n))` - Inserted `n` default achievements
    /// - `Ok(SeedOutcome::AlreadyPopulated)` - Table already had rows
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, DbErr> {
        if self.count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let achievements = default_achievements();
        let count = achievements.len() as u64;
        entity::prelude::Achievement::insert_many(achievements)
            .exec(self.db)
            .await?;

        Ok(SeedOutcome::Seeded(count))
    }
}

/// The default achievement ladder across kills, beds, wins, and streaks.
fn default_achievements() -> Vec<entity::achievement::ActiveModel> {
    let achievement = |name: &str,
                       description: &str,
                       icon: &str,
                       requirement_kind: &str,
                       requirement_value: i32,
                       reward_coins: i32| {
        entity::achievement::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            icon: ActiveValue::Set(icon.to_string()),
            requirement_kind: ActiveValue::Set(requirement_kind.to_string()),
            requirement_value: ActiveValue::Set(requirement_value),
            reward_coins: ActiveValue::Set(reward_coins),
            ..Default::default()
        }
    };

    vec![
        achievement("Getting Started", "Win your first game", "trophy", "wins", 1, 100),
        achievement("Bed Bug", "Break your first bed", "bed", "beds_broken", 1, 50),
        achievement("Warm Up", "Get 10 kills", "sword", "kills", 10, 50),
        achievement("Hunter", "Get 100 kills", "sword", "kills", 100, 250),
        achievement("Slayer", "Get 1,000 kills", "sword", "kills", 1000, 1000),
        achievement("Demolitionist", "Break 50 beds", "bed", "beds_broken", 50, 400),
        achievement("No More Beds", "Break 250 beds", "bed", "beds_broken", 250, 1500),
        achievement("Closer", "Get 100 final kills", "skull", "final_kills", 100, 500),
        achievement("Seasoned", "Win 50 games", "trophy", "wins", 50, 500),
        achievement("Conqueror", "Win 250 games", "trophy", "wins", 250, 2000),
        achievement("On Fire", "Reach a 10 game winstreak", "flame", "winstreak", 10, 750),
        achievement("Unstoppable", "Reach a 25 game winstreak", "flame", "winstreak", 25, 2500),
    ]
}
