//! Player view models for the leaderboard and profile pages.

use serde::Serialize;

/// Experience required per player level.
const XP_PER_LEVEL: i32 = 5000;

/// Computes a player's level from accumulated experience.
///
/// Levels start at 1 and advance every [`XP_PER_LEVEL`] experience.
pub fn level_for_experience(experience: i32) -> i32 {
    experience.max(0) / XP_PER_LEVEL + 1
}

/// One row of the leaderboard, ranked within the queried ordering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based rank within the leaderboard query.
    pub rank: u64,
    pub username: String,
    pub level: i32,
    pub kills: i32,
    pub deaths: i32,
    pub final_kills: i32,
    pub beds_broken: i32,
    pub wins: i32,
    pub losses: i32,
    pub winstreak: i32,
    pub experience: i32,
}

impl LeaderboardEntry {
    /// Converts a player entity into a ranked leaderboard row.
    ///
    /// # Arguments
    /// - `rank` - 1-based position within the queried ordering
    /// - `entity` - Player entity from the database
    ///
    /// # Returns
    /// - `LeaderboardEntry` - Row ready for template or API serialization
    pub fn from_entity(rank: u64, entity: entity::player::Model) -> Self {
        Self {
            rank,
            level: level_for_experience(entity.experience),
            username: entity.username,
            kills: entity.kills,
            deaths: entity.deaths,
            final_kills: entity.final_kills,
            beds_broken: entity.beds_broken,
            wins: entity.wins,
            losses: entity.losses,
            winstreak: entity.winstreak,
            experience: entity.experience,
        }
    }
}

/// A quest together with one player's progress on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestProgress {
    pub quest: entity::quest::Model,
    pub progress: i32,
    pub completed: bool,
}

/// Full player profile assembled from the player row and its joins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerProfile {
    pub player: entity::player::Model,
    pub level: i32,
    pub kill_death_ratio: f64,
    pub win_loss_ratio: f64,
    /// Currently equipped title, if any.
    pub equipped_title: Option<entity::custom_title::Model>,
    /// Enabled gradient theme, if any.
    pub gradient: Option<entity::gradient_theme::Model>,
    pub achievements: Vec<entity::achievement::Model>,
    pub badges: Vec<entity::badge::Model>,
    pub quests: Vec<QuestProgress>,
    /// Shop items the player has purchased.
    pub owned_items: Vec<entity::shop_item::Model>,
}

impl PlayerProfile {
    /// Computes the derived ratio and level fields for a player entity.
    ///
    /// A zero divisor yields the numerator itself, matching how the ratios
    /// are usually presented for players who have never died or lost.
    pub fn ratios(player: &entity::player::Model) -> (f64, f64) {
        let kdr = if player.deaths == 0 {
            f64::from(player.kills)
        } else {
            f64::from(player.kills) / f64::from(player.deaths)
        };
        let wlr = if player.losses == 0 {
            f64::from(player.wins)
        } else {
            f64::from(player.wins) / f64::from(player.losses)
        };
        (kdr, wlr)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// Tests level progression boundaries.
    #[test]
    fn computes_level_from_experience() {
        assert_eq!(level_for_experience(0), 1);
        assert_eq!(level_for_experience(4999), 1);
        assert_eq!(level_for_experience(5000), 2);
        assert_eq!(level_for_experience(12500), 3);
        assert_eq!(level_for_experience(-10), 1);
    }
}
