//! Clan data repository.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::model::clan::ClanSummary;

/// Repository providing database operations for clans.
pub struct ClanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClanRepository<'a> {
    /// Creates a new ClanRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all clans.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of clan rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Clan::find().count(self.db).await
    }

    /// Gets all clans with their leader name and member count.
    ///
    /// Member counts come from a single grouped query rather than one query
    /// per clan; clans without members report zero.
    ///
    /// # Returns
    /// - `Ok(Vec<ClanSummary>)` - Clans ordered by name
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_summaries(&self) -> Result<Vec<ClanSummary>, DbErr> {
        let clans = entity::prelude::Clan::find()
            .order_by_asc(entity::clan::Column::Name)
            .find_also_related(entity::prelude::Player)
            .all(self.db)
            .await?;

        let counts: Vec<(i32, i64)> = entity::prelude::ClanMember::find()
            .select_only()
            .column(entity::clan_member::Column::ClanId)
            .column_as(entity::clan_member::Column::Id.count(), "member_count")
            .group_by(entity::clan_member::Column::ClanId)
            .into_tuple()
            .all(self.db)
            .await?;
        let counts: HashMap<i32, i64> = counts.into_iter().collect();

        Ok(clans
            .into_iter()
            .map(|(clan, leader)| {
                let member_count = counts.get(&clan.id).copied().unwrap_or(0);
                ClanSummary {
                    leader_name: leader.map(|player| player.username),
                    member_count,
                    clan,
                }
            })
            .collect())
    }
}
