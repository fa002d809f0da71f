//! Clan view models.

use serde::Serialize;

/// A clan with display data for the clan listing page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClanSummary {
    pub clan: entity::clan::Model,
    /// Username of the clan leader, if the leader row still exists.
    pub leader_name: Option<String>,
    pub member_count: i64,
}
