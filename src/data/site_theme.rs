//! Site theme data repository and default palette definitions.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::model::seed::SeedOutcome;

/// Repository providing database operations for site themes.
pub struct SiteThemeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteThemeRepository<'a> {
    /// Creates a new SiteThemeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all site themes.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of theme rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::SiteTheme::find().count(self.db).await
    }

    /// Gets all site themes ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - All themes
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::site_theme::Model>, DbErr> {
        entity::prelude::SiteTheme::find()
            .order_by_asc(entity::site_theme::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets the theme pages render with.
    ///
    /// Prefers the theme flagged as default and falls back to any theme, so
    /// pages stay styled even when the flag was never set.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Default (or first available) theme
    /// - `Ok(None)` - No themes exist at all
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_default(&self) -> Result<Option<entity::site_theme::Model>, DbErr> {
        let default = entity::prelude::SiteTheme::find()
            .filter(entity::site_theme::Column::IsDefault.eq(true))
            .one(self.db)
            .await?;

        match default {
            Some(theme) => Ok(Some(theme)),
            None => entity::prelude::SiteTheme::find().one(self.db).await,
        }
    }

    /// Populates the default theme palettes when the table is empty.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded(n))` - Inserted `n` default themes
    /// - `Ok(SeedOutcome::AlreadyPopulated)` - Table already had rows
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, DbErr> {
        if self.count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let themes = default_themes();
        let count = themes.len() as u64;
        entity::prelude::SiteTheme::insert_many(themes)
            .exec(self.db)
            .await?;

        Ok(SeedOutcome::Seeded(count))
    }
}

/// The default site palettes; "Classic" is the startup default.
fn default_themes() -> Vec<entity::site_theme::ActiveModel> {
    let theme = |name: &str, primary: &str, secondary: &str, accent: &str, is_default: bool| {
        entity::site_theme::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            primary_color: ActiveValue::Set(primary.to_string()),
            secondary_color: ActiveValue::Set(secondary.to_string()),
            accent_color: ActiveValue::Set(accent.to_string()),
            is_default: ActiveValue::Set(is_default),
            ..Default::default()
        }
    };

    vec![
        theme("Classic", "#5865F2", "#2B2D31", "#FFD700", true),
        theme("Midnight", "#1A1B26", "#24283B", "#7AA2F7", false),
        theme("Emerald", "#0F3D2E", "#14532D", "#34D399", false),
        theme("Crimson", "#450A0A", "#7F1D1D", "#F87171", false),
        theme("Sunset", "#451A03", "#7C2D12", "#FB923C", false),
    ]
}
