//! Site-wide aggregate statistics.

use serde::Serialize;

/// Totals across all players, shown on the statistics page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SiteStatistics {
    pub total_players: u64,
    pub total_kills: i64,
    pub total_deaths: i64,
    pub total_wins: i64,
    pub total_beds_broken: i64,
}
