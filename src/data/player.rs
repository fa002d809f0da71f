//! Player data repository: leaderboard, profiles, and site-wide totals.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::model::{
    player::{level_for_experience, LeaderboardEntry, PlayerProfile, QuestProgress},
    statistics::SiteStatistics,
};

/// Repository providing database operations for players.
pub struct PlayerRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerRepository<'a> {
    /// Creates a new PlayerRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts all registered players.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of player rows
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Player::find().count(self.db).await
    }

    /// Fetches the top players ordered by experience, then wins.
    ///
    /// Rows are ranked 1-based in query order, which is the rank shown on
    /// the leaderboard page.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of rows to return
    ///
    /// # Returns
    /// - `Ok(Vec<LeaderboardEntry>)` - Ranked leaderboard rows
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_leaderboard(&self, limit: u64) -> Result<Vec<LeaderboardEntry>, DbErr> {
        let players = entity::prelude::Player::find()
            .order_by_desc(entity::player::Column::Experience)
            .order_by_desc(entity::player::Column::Wins)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(players
            .into_iter()
            .enumerate()
            .map(|(index, player)| LeaderboardEntry::from_entity(index as u64 + 1, player))
            .collect())
    }

    /// Finds a player by their unique username.
    ///
    /// # Arguments
    /// - `username` - Exact username to look up
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Player found
    /// - `Ok(None)` - No player with that username
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::player::Model>, DbErr> {
        entity::prelude::Player::find()
            .filter(entity::player::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Assembles the full profile for a player.
    ///
    /// Joins the player row against achievements, badges, quest progress,
    /// the equipped title, the enabled gradient theme, and purchased shop
    /// items. Join rows whose counterpart was deleted are skipped.
    ///
    /// # Arguments
    /// - `username` - Exact username to look up
    ///
    /// # Returns
    /// - `Ok(Some(PlayerProfile))` - Profile ready for rendering
    /// - `Ok(None)` - No player with that username
    /// - `Err(DbErr)` - Database error during any of the queries
    pub async fn get_profile(&self, username: &str) -> Result<Option<PlayerProfile>, DbErr> {
        let Some(player) = self.find_by_username(username).await? else {
            return Ok(None);
        };

        let achievements = entity::prelude::PlayerAchievement::find()
            .filter(entity::player_achievement::Column::PlayerId.eq(player.id))
            .find_also_related(entity::prelude::Achievement)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, achievement)| achievement)
            .collect();

        let badges = entity::prelude::PlayerBadge::find()
            .filter(entity::player_badge::Column::PlayerId.eq(player.id))
            .find_also_related(entity::prelude::Badge)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, badge)| badge)
            .collect();

        let quests = entity::prelude::PlayerQuest::find()
            .filter(entity::player_quest::Column::PlayerId.eq(player.id))
            .find_also_related(entity::prelude::Quest)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(link, quest)| {
                quest.map(|quest| QuestProgress {
                    quest,
                    progress: link.progress,
                    completed: link.completed,
                })
            })
            .collect();

        let equipped_title = entity::prelude::PlayerTitle::find()
            .filter(entity::player_title::Column::PlayerId.eq(player.id))
            .filter(entity::player_title::Column::Equipped.eq(true))
            .find_also_related(entity::prelude::CustomTitle)
            .one(self.db)
            .await?
            .and_then(|(_, title)| title);

        let gradient = entity::prelude::PlayerGradientSetting::find()
            .filter(entity::player_gradient_setting::Column::PlayerId.eq(player.id))
            .filter(entity::player_gradient_setting::Column::Enabled.eq(true))
            .find_also_related(entity::prelude::GradientTheme)
            .one(self.db)
            .await?
            .and_then(|(_, gradient)| gradient);

        let owned_items = entity::prelude::ShopPurchase::find()
            .filter(entity::shop_purchase::Column::PlayerId.eq(player.id))
            .find_also_related(entity::prelude::ShopItem)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, item)| item)
            .collect();

        let (kill_death_ratio, win_loss_ratio) = PlayerProfile::ratios(&player);
        let level = level_for_experience(player.experience);

        Ok(Some(PlayerProfile {
            player,
            level,
            kill_death_ratio,
            win_loss_ratio,
            equipped_title,
            gradient,
            achievements,
            badges,
            quests,
            owned_items,
        }))
    }

    /// Computes site-wide totals across all players.
    ///
    /// # Returns
    /// - `Ok(SiteStatistics)` - Aggregate sums (zero for an empty table)
    /// - `Err(DbErr)` - Database error during aggregation
    pub async fn get_site_statistics(&self) -> Result<SiteStatistics, DbErr> {
        let totals: Option<(Option<i64>, Option<i64>, Option<i64>, Option<i64>)> =
            entity::prelude::Player::find()
                .select_only()
                .column_as(entity::player::Column::Kills.sum(), "total_kills")
                .column_as(entity::player::Column::Deaths.sum(), "total_deaths")
                .column_as(entity::player::Column::Wins.sum(), "total_wins")
                .column_as(entity::player::Column::BedsBroken.sum(), "total_beds_broken")
                .into_tuple()
                .one(self.db)
                .await?;

        let (kills, deaths, wins, beds_broken) = totals.unwrap_or_default();

        Ok(SiteStatistics {
            total_players: self.count().await?,
            total_kills: kills.unwrap_or(0),
            total_deaths: deaths.unwrap_or(0),
            total_wins: wins.unwrap_or(0),
            total_beds_broken: beds_broken.unwrap_or(0),
        })
    }
}
