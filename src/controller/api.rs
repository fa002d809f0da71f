//! JSON API handlers, mounted when the API is enabled in configuration.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    data::player::PlayerRepository,
    error::AppError,
    model::{
        player::{LeaderboardEntry, PlayerProfile},
        statistics::SiteStatistics,
    },
    state::AppState,
};

/// Number of rows returned by the leaderboard endpoint.
const LEADERBOARD_SIZE: u64 = 100;

/// GET /api/leaderboard - Ranked top players as JSON.
///
/// # Returns
/// - `200 OK`: JSON array of leaderboard entries
/// - `500 Internal Server Error`: Database error
pub async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    let leaderboard = PlayerRepository::new(&state.db)
        .get_leaderboard(LEADERBOARD_SIZE)
        .await?;

    Ok(Json(leaderboard))
}

/// GET /api/players/{username} - Full player profile as JSON.
///
/// # Returns
/// - `200 OK`: JSON profile including achievements, badges, and quests
/// - `404 Not Found`: No player with that username
/// - `500 Internal Server Error`: Database error
pub async fn player(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<PlayerProfile>, AppError> {
    let profile = PlayerRepository::new(&state.db)
        .get_profile(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Player '{username}' not found")))?;

    Ok(Json(profile))
}

/// GET /api/statistics - Site-wide totals as JSON.
///
/// # Returns
/// - `200 OK`: JSON totals across all players
/// - `500 Internal Server Error`: Database error
pub async fn statistics(State(state): State<AppState>) -> Result<Json<SiteStatistics>, AppError> {
    let stats = PlayerRepository::new(&state.db)
        .get_site_statistics()
        .await?;

    Ok(Json(stats))
}
