//! Custom title data repository and default title definitions.

use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder};

use crate::model::seed::SeedOutcome;

/// Repository providing database operations for custom titles.
pub struct TitleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TitleRepository<'a> {
    /// Creates a new TitleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all custom titles.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of title rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::CustomTitle::find().count(self.db).await
    }

    /// Gets all titles ordered by price.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Titles, cheapest first
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<entity::custom_title::Model>, DbErr> {
        entity::prelude::CustomTitle::find()
            .order_by_asc(entity::custom_title::Column::Price)
            .order_by_asc(entity::custom_title::Column::Name)
            .all(self.db)
            .await
    }

    /// Populates the default title set when the table is empty.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded(n))` - Inserted `n` default titles
    /// - `Ok(SeedOutcome::AlreadyPopulated)` - Table already had rows
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, DbErr> {
        if self.count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let titles = default_titles();
        let count = titles.len() as u64;
        entity::prelude::CustomTitle::insert_many(titles)
            .exec(self.db)
            .await?;

        Ok(SeedOutcome::Seeded(count))
    }
}

/// The default purchasable title set.
fn default_titles() -> Vec<entity::custom_title::ActiveModel> {
    let title = |name: &str, display_text: &str, color: &str, price: i32, rarity: &str| {
        entity::custom_title::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            display_text: ActiveValue::Set(display_text.to_string()),
            color: ActiveValue::Set(color.to_string()),
            price: ActiveValue::Set(price),
            rarity: ActiveValue::Set(rarity.to_string()),
            ..Default::default()
        }
    };

    vec![
        title("Rookie", "Rookie", "#9E9E9E", 0, "common"),
        title("Fighter", "Fighter", "#4CAF50", 250, "common"),
        title("Bed Breaker", "Bed Breaker", "#FF7043", 500, "rare"),
        title("Night Owl", "Night Owl", "#7E57C2", 750, "rare"),
        title("Warlord", "Warlord", "#E53935", 1500, "epic"),
        title("Dream Crusher", "Dream Crusher", "#26C6DA", 2000, "epic"),
        title("Immortal", "Immortal", "#FFD700", 5000, "legendary"),
        title("The Final Boss", "The Final Boss", "#FF1744", 10000, "legendary"),
    ]
}
