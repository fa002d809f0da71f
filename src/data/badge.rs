//! Badge data repository and default badge definitions.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::model::seed::SeedOutcome;

/// Repository providing database operations for badges.
pub struct BadgeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BadgeRepository<'a> {
    /// Creates a new BadgeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all badges.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of badge rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Badge::find().count(self.db).await
    }

    /// Gets all badges ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All badges
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::badge::Model>, DbErr> {
        entity::prelude::Badge::find()
            .order_by_asc(entity::badge::Column::Name)
            .all(self.db)
            .await
    }

    /// Populates the default badges when the table is empty.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded(n))` - Inserted `n` default badges
    /// - `Ok(SeedOutcome::AlreadyPopulated)` - Table already had rows
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, DbErr> {
        if self.count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let badges = default_badges();
        let count = badges.len() as u64;
        entity::prelude::Badge::insert_many(badges)
            .exec(self.db)
            .await?;

        Ok(SeedOutcome::Seeded(count))
    }
}

/// The default awardable badge set.
fn default_badges() -> Vec<entity::badge::ActiveModel> {
    let badge = |name: &str, description: &str, icon: &str, rarity: &str| {
        entity::badge::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            icon: ActiveValue::Set(icon.to_string()),
            rarity: ActiveValue::Set(rarity.to_string()),
            ..Default::default()
        }
    };

    vec![
        badge("Founder", "Joined during the first season", "star", "legendary"),
        badge("Veteran", "Active for over a year", "shield", "epic"),
        badge("Tournament Champion", "Won an official tournament", "crown", "legendary"),
        badge("Clan Leader", "Leads a clan with 10 or more members", "banner", "rare"),
        badge("Top 10", "Reached the leaderboard top 10", "medal", "epic"),
        badge("Bug Hunter", "Reported a confirmed bug", "wrench", "rare"),
        badge("Community Helper", "Recognized for helping new players", "heart", "common"),
    ]
}
