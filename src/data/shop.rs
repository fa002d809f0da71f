//! Shop item data repository and default shop stock.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::model::seed::SeedOutcome;

/// Repository providing database operations for shop items.
pub struct ShopRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopRepository<'a> {
    /// Creates a new ShopRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all shop items.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of item rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::ShopItem::find().count(self.db).await
    }

    /// Gets all currently purchasable items, grouped by category order.
    ///
    /// Items taken off sale keep their rows (past purchases still reference
    /// them) but are not listed.
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - Available items ordered by category, then price
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_available(&self) -> Result<Vec<entity::shop_item::Model>, DbErr> {
        entity::prelude::ShopItem::find()
            .filter(entity::shop_item::Column::Available.eq(true))
            .order_by_asc(entity::shop_item::Column::Category)
            .order_by_asc(entity::shop_item::Column::Price)
            .all(self.db)
            .await
    }

    /// Populates the default shop stock when the table is empty.
    ///
    /// # Returns
    /// - `Ok(SeedOutcome::Seeded(n))` - Inserted `n` default items
    /// - `Ok(SeedOutcome::AlreadyPopulated)` - Table already had rows
    /// - `Err(DbErr)` - Database error during count or insert
    pub async fn seed_defaults(&self) -> Result<SeedOutcome, DbErr> {
        if self.count().await? > 0 {
            return Ok(SeedOutcome::AlreadyPopulated);
        }

        let items = default_items();
        let count = items.len() as u64;
        entity::prelude::ShopItem::insert_many(items)
            .exec(self.db)
            .await?;

        Ok(SeedOutcome::Seeded(count))
    }
}

/// The default shop stock across boosters, perks, and cosmetics.
fn default_items() -> Vec<entity::shop_item::ActiveModel> {
    let item = |name: &str, description: &str, category: &str, price: i32| {
        entity::shop_item::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(description.to_string()),
            category: ActiveValue::Set(category.to_string()),
            price: ActiveValue::Set(price),
            available: ActiveValue::Set(true),
            ..Default::default()
        }
    };

    vec![
        item("XP Booster (1h)", "Double experience for one hour", "boosters", 500),
        item("XP Booster (24h)", "Double experience for a day", "boosters", 2500),
        item("Coin Booster (1h)", "Double coins for one hour", "boosters", 500),
        item("Coin Booster (24h)", "Double coins for a day", "boosters", 2500),
        item("Victory Fireworks", "Fireworks on every win", "cosmetics", 1500),
        item("Bed Destruction Effect", "Lightning strike when you break a bed", "cosmetics", 2000),
        item("Golden Chat Color", "Write in gold in the lobby chat", "cosmetics", 3000),
        item("Profile Banner", "Unlock custom profile banners", "perks", 1000),
        item("Stat Reset Token", "Reset your statistics once", "perks", 5000),
        item("Clan Slot Upgrade", "Raise your clan capacity by 5", "perks", 4000),
    ]
}
