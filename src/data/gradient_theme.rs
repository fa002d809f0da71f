//! Gradient theme data repository and default gradient definitions.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::model::seed::SeedOutcome;

/// Repository providing database operations for name gradient themes.
pub struct GradientThemeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GradientThemeRepository<'a> {
    /// Creates a new GradientThemeRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all gradient themes.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of gradient rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::GradientTheme::find().count(self.db).await
    }

    /// Gets all gradient themes ordered by price.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Gradients, cheapest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::gradient_theme::Model>, DbErr> {
        entity::prelude::GradientTheme::find()
            .order_by_asc(entity::gradient_theme::Column::Price)
            .order_by_asc(entity::gradient_theme::Column::Name)
            .all(self.db)
            .await
    }

    /// Populates the default gradients when the table is empty.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded(n))` - Inserted `n` default gradients
    /// - `Ok(SeedOutcome::AlreadyPopulated)` - Table already had rows
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, DbErr> {
        if self.count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let gradients = default_gradients();
        let count = gradients.len() as u64;
        entity::prelude::GradientTheme::insert_many(gradients)
            .exec(self.db)
            .await?;

        Ok(SeedOutcome::Seeded(count))
    }
}

/// The default purchasable name gradients.
fn default_gradients() -> Vec<entity::gradient_theme::ActiveModel> {
    let gradient = |name: &str, start_color: &str, end_color: &str, price: i32| {
        entity::gradient_theme::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            start_color: ActiveValue::Set(start_color.to_string()),
            end_color: ActiveValue::Set(end_color.to_string()),
            price: ActiveValue::Set(price),
            ..Default::default()
        }
    };

    vec![
        gradient("Sunset", "#FF5F6D", "#FFC371", 1000),
        gradient("Ocean", "#2193B0", "#6DD5ED", 1000),
        gradient("Aurora", "#00C9FF", "#92FE9D", 1500),
        gradient("Flame", "#F83600", "#F9D423", 1500),
        gradient("Toxic", "#76B852", "#8DC26F", 2000),
        gradient("Galaxy", "#654EA3", "#EAAFC8", 2500),
    ]
}
