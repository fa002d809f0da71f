//! Quest factory for creating test quest entities.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test quests with customizable fields.
pub struct QuestFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    quest_type: String,
    active: bool,
}

impl<'a> QuestFactory<'a> {
    /// Creates a new QuestFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Quest {id}"` where id is auto-incremented
    /// - quest_type: `"daily"`
    /// - active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Quest {id}"),
            quest_type: "daily".to_string(),
            active: true,
        }
    }

    /// Sets the quest name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the quest type (`"daily"` or `"weekly"`).
    pub fn quest_type(mut self, quest_type: impl Into<String>) -> Self {
        self.quest_type = quest_type.into();
        self
    }

    /// Sets whether the quest is active.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Inserts the quest into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created quest entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::quest::Model, DbErr> {
        entity::quest::ActiveModel {
            name: ActiveValue::Set(self.name.clone()),
            description: ActiveValue::Set(format!("Description for {}", self.name)),
            quest_type: ActiveValue::Set(self.quest_type),
            target_value: ActiveValue::Set(5),
            reward_coins: ActiveValue::Set(50),
            reward_experience: ActiveValue::Set(100),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active daily quest with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created quest entity
/// - `Err(DbErr)` - Database error during creation
pub async fn create_quest(db: &DatabaseConnection) -> Result<entity::quest::Model, DbErr> {
    QuestFactory::new(db).build().await
}
