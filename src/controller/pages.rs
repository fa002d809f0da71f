//! Server-rendered page handlers.

use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    response::Html,
};
use tera::Context;

use crate::{
    data::{
        clan::ClanRepository, cursor_theme::CursorThemeRepository,
        gradient_theme::GradientThemeRepository, player::PlayerRepository, quest::QuestRepository,
        shop::ShopRepository, site_theme::SiteThemeRepository, title::TitleRepository,
        tournament::TournamentRepository,
    },
    error::AppError,
    state::AppState,
};

/// Number of rows shown on the leaderboard page.
const LEADERBOARD_SIZE: u64 = 50;

/// Builds the context shared by every page: language and site theme.
///
/// The language comes from the `lang` query parameter (default English);
/// the theme is the database default so all pages style consistently.
async fn base_context(
    state: &AppState,
    params: &HashMap<String, String>,
) -> Result<Context, AppError> {
    let mut context = Context::new();
    context.insert(
        "lang",
        params.get("lang").map(String::as_str).unwrap_or("en"),
    );
    context.insert(
        "theme",
        &SiteThemeRepository::new(&state.db).get_default().await?,
    );
    Ok(context)
}

/// GET / - Leaderboard home page.
///
/// Shows the ranked top players plus the currently active quests.
pub async fn home(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let mut context = base_context(&state, &params).await?;

    let leaderboard = PlayerRepository::new(&state.db)
        .get_leaderboard(LEADERBOARD_SIZE)
        .await?;
    let quests = QuestRepository::new(&state.db).get_active().await?;

    context.insert("leaderboard", &leaderboard);
    context.insert("quests", &quests);

    Ok(Html(state.templates.render("index.html", &context)?))
}

/// GET /statistics - Site-wide aggregate statistics.
pub async fn statistics(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let mut context = base_context(&state, &params).await?;

    let stats = PlayerRepository::new(&state.db)
        .get_site_statistics()
        .await?;
    let total_clans = ClanRepository::new(&state.db).count().await?;
    let total_tournaments = TournamentRepository::new(&state.db).count().await?;

    context.insert("stats", &stats);
    context.insert("total_clans", &total_clans);
    context.insert("total_tournaments", &total_tournaments);

    Ok(Html(state.templates.render("statistics.html", &context)?))
}

/// GET /shop - Shop page with items and cosmetic catalogs.
pub async fn shop(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let mut context = base_context(&state, &params).await?;

    let items = ShopRepository::new(&state.db).get_available().await?;
    let titles = TitleRepository::new(&state.db).get_all().await?;
    let gradients = GradientThemeRepository::new(&state.db).get_all().await?;
    let cursors = CursorThemeRepository::new(&state.db).get_all().await?;

    context.insert("items", &items);
    context.insert("titles", &titles);
    context.insert("gradients", &gradients);
    context.insert("cursors", &cursors);

    Ok(Html(state.templates.render("shop.html", &context)?))
}

/// GET /players/{username} - Player profile page.
///
/// # Returns
/// - `200 OK` - Rendered profile
/// - `404 Not Found` - No player with that username
pub async fn player_profile(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let mut context = base_context(&state, &params).await?;

    let profile = PlayerRepository::new(&state.db)
        .get_profile(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Player '{username}' not found")))?;

    context.insert("profile", &profile);

    Ok(Html(state.templates.render("player.html", &context)?))
}

/// GET /clans - Clan listing page.
pub async fn clans(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let mut context = base_context(&state, &params).await?;

    let clans = ClanRepository::new(&state.db).get_summaries().await?;
    context.insert("clans", &clans);

    Ok(Html(state.templates.render("clans.html", &context)?))
}

/// GET /tournaments - Tournament listing page.
pub async fn tournaments(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Html<String>, AppError> {
    let mut context = base_context(&state, &params).await?;

    let tournaments = TournamentRepository::new(&state.db).get_summaries().await?;
    context.insert("tournaments", &tournaments);

    Ok(Html(state.templates.render("tournaments.html", &context)?))
}
