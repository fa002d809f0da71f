//! Tournament data repository.

use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

use crate::model::tournament::TournamentSummary;

/// Repository providing database operations for tournaments.
pub struct TournamentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentRepository<'a> {
    /// Creates a new TournamentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all tournaments.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tournament rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Tournament::find().count(self.db).await
    }

    /// Gets all tournaments with registration counts, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<TournamentSummary>)` - Tournaments ordered by start time
    /// - `Err(DbErr)` - Database error during either query
    pub async fn get_summaries(&self) -> Result<Vec<TournamentSummary>, DbErr> {
        let tournaments = entity::prelude::Tournament::find()
            .order_by_desc(entity::tournament::Column::StartsAt)
            .all(self.db)
            .await?;

        let counts: Vec<(i32, i64)> = entity::prelude::TournamentParticipant::find()
            .select_only()
            .column(entity::tournament_participant::Column::TournamentId)
            .column_as(
                entity::tournament_participant::Column::Id.count(),
                "participant_count",
            )
            .group_by(entity::tournament_participant::Column::TournamentId)
            .into_tuple()
            .all(self.db)
            .await?;
        let counts: HashMap<i32, i64> = counts.into_iter().collect();

        Ok(tournaments
            .into_iter()
            .map(|tournament| {
                let participant_count = counts.get(&tournament.id).copied().unwrap_or(0);
                TournamentSummary {
                    tournament,
                    participant_count,
                }
            })
            .collect())
    }
}
