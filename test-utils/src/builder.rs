use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring in-memory SQLite test
/// environments. Add entity tables, then call `build()` to create the
/// configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Player, Quest};
///
/// let test = TestBuilder::new()
///     .with_table(Player)
///     .with_table(Quest)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite syntax. Tables should be added in dependency order
    /// (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the player table and all of its join tables' counterparts.
    ///
    /// This convenience method adds, in dependency order: Player, Quest,
    /// PlayerQuest, Achievement, PlayerAchievement, CustomTitle,
    /// PlayerTitle, GradientTheme, PlayerGradientSetting, ShopItem,
    /// ShopPurchase, Badge, PlayerBadge.
    ///
    /// Use this when testing player profile functionality.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_player_tables(self) -> Self {
        self.with_table(Player)
            .with_table(Quest)
            .with_table(PlayerQuest)
            .with_table(Achievement)
            .with_table(PlayerAchievement)
            .with_table(CustomTitle)
            .with_table(PlayerTitle)
            .with_table(GradientTheme)
            .with_table(PlayerGradientSetting)
            .with_table(ShopItem)
            .with_table(ShopPurchase)
            .with_table(Badge)
            .with_table(PlayerBadge)
    }

    /// Adds every table in the schema.
    ///
    /// Equivalent to `with_player_tables()` plus the theme, clan, and
    /// tournament tables. Use this for startup and seeding tests that touch
    /// every entity kind.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_all_tables(self) -> Self {
        self.with_player_tables()
            .with_table(SiteTheme)
            .with_table(CursorTheme)
            .with_table(Clan)
            .with_table(ClanMember)
            .with_table(Tournament)
            .with_table(TournamentParticipant)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
