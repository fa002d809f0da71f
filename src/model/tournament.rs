//! Tournament view models.

use serde::Serialize;

/// A tournament with its current registration count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TournamentSummary {
    pub tournament: entity::tournament::Model,
    pub participant_count: i64,
}
