//! Cursor theme data repository and default cursor definitions.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::model::seed::SeedOutcome;

/// Repository providing database operations for cursor themes.
pub struct CursorThemeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CursorThemeRepository<'a> {
    /// Creates a new CursorThemeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all cursor themes.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of cursor rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::CursorTheme::find().count(self.db).await
    }

    /// Gets all cursor themes ordered by price.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Cursors, cheapest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::cursor_theme::Model>, DbErr> {
        entity::prelude::CursorTheme::find()
            .order_by_asc(entity::cursor_theme::Column::Price)
            .order_by_asc(entity::cursor_theme::Column::Name)
            .all(self.db)
            .await
    }

    /// Populates the default cursors when the table is empty.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded(n))` - Inserted `n` default cursors
    /// - `Ok(SeedOutcome::AlreadyPopulated)` - Table already had rows
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, DbErr> {
        if self.count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let cursors = default_cursors();
        let count = cursors.len() as u64;
        entity::prelude::CursorTheme::insert_many(cursors)
            .exec(self.db)
            .await?;

        Ok(SeedOutcome::Seeded(count))
    }
}

/// The default cursor cosmetics.
fn default_cursors() -> Vec<entity::cursor_theme::ActiveModel> {
    let cursor = |name: &str, style: &str, price: i32| entity::cursor_theme::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        style: ActiveValue::Set(style.to_string()),
        price: ActiveValue::Set(price),
        ..Default::default()
    };

    vec![
        cursor("Default", "default", 0),
        cursor("Sword", "sword", 500),
        cursor("Pickaxe", "pickaxe", 500),
        cursor("Fireball", "fireball", 1000),
        cursor("Ender Pearl", "ender-pearl", 1000),
        cursor("Crystal", "crystal", 2000),
    ]
}
