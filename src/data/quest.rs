//! Quest data repository and default quest definitions.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::model::seed::SeedOutcome;

/// Repository providing database operations for quests.
pub struct QuestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QuestRepository<'a> {
    /// Creates a new QuestRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all quests.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of quest rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Quest::find().count(self.db).await
    }

    /// Gets all active quests ordered by type and name.
    ///
    /// Used for the quest sections on the home and profile pages; retired
    /// quests keep their rows but are no longer listed.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Active quests, daily before weekly
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active(&self) -> Result<Vec<entity::quest::Model>, DbErr> {
        entity::prelude::Quest::find()
            .filter(entity::quest::Column::Active.eq(true))
            .order_by_asc(entity::quest::Column::QuestType)
            .order_by_asc(entity::quest::Column::Name)
            .all(self.db)
            .await
    }

    /// Populates the default quest set when the table is empty.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded(n))` - Inserted `n` default quests
    /// - `Ok(SeedOutcome::AlreadyPopulated)` - Table already had rows
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, DbErr> {
        if self.count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let quests = default_quests();
        let count = quests.len() as u64;
        entity::prelude::Quest::insert_many(quests)
            .exec(self.db)
            .await?;

        Ok(SeedOutcome::Seeded(count))
    }
}

/// The default quest set: four daily and four weekly objectives.
fn default_quests() -> Vec<entity::quest::ActiveModel> {
    let quest = |name: &str,
                 description: &str,
                 quest_type: &str,
                 target_value: i32,
                 reward_coins: i32,
                 reward_experience: i32| {
        entity::quest::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            quest_type: ActiveValue::Set(quest_type.to_string()),
            target_value: ActiveValue::Set(target_value),
            reward_coins: ActiveValue::Set(reward_coins),
            reward_experience: ActiveValue::Set(reward_experience),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
    };

    vec![
        quest("First Blood", "Get 5 kills in Bedwars games", "daily", 5, 50, 100),
        quest("Bed Destroyer", "Break 3 beds", "daily", 3, 75, 150),
        quest("Sweet Victory", "Win a Bedwars game", "daily", 1, 100, 200),
        quest("Finisher", "Get 3 final kills", "daily", 3, 75, 150),
        quest("Weekly Warrior", "Get 50 kills this week", "weekly", 50, 400, 800),
        quest("Demolition Crew", "Break 20 beds this week", "weekly", 20, 500, 1000),
        quest("Champion's Road", "Win 10 games this week", "weekly", 10, 600, 1200),
        quest("Marathon", "Play 25 games this week", "weekly", 25, 300, 600),
    ]
}
