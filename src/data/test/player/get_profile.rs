use sea_orm::{ActiveModelTrait, ActiveValue};

use super::*;
use crate::data::{achievement::AchievementRepository, title::TitleRepository};

/// Tests that an unknown username yields no profile.
#[tokio::test]
async fn returns_none_for_unknown_player() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = PlayerRepository::new(db).get_profile("Nobody").await?;

    assert!(profile.is_none());

    Ok(())
}

/// Tests profile assembly across the join tables.
///
/// Creates a player with one unlocked achievement and an equipped title,
/// then verifies the profile carries both plus the derived level and
/// ratio fields.
///
/// Expected: profile with one achievement, the equipped title, no badges
#[tokio::test]
async fn assembles_profile_from_joins() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = PlayerFactory::new(db)
        .username("Herobrine")
        .kills(30)
        .deaths(10)
        .wins(8)
        .losses(4)
        .experience(12500)
        .build()
        .await?;

    AchievementRepository::new(db).seed_defaults().await?;
    let achievement = AchievementRepository::new(db).get_all().await?[0].clone();
    entity::player_achievement::ActiveModel {
        player_id: ActiveValue::Set(player.id),
        achievement_id: ActiveValue::Set(achievement.id),
        unlocked_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    TitleRepository::new(db).seed_defaults().await?;
    let title = TitleRepository::new(db).get_all().await?[0].clone();
    entity::player_title::ActiveModel {
        player_id: ActiveValue::Set(player.id),
        title_id: ActiveValue::Set(title.id),
        equipped: ActiveValue::Set(true),
        acquired_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let profile = PlayerRepository::new(db)
        .get_profile("Herobrine")
        .await?
        .expect("profile should exist");

    assert_eq!(profile.player.username, "Herobrine");
    assert_eq!(profile.level, 3);
    assert!((profile.kill_death_ratio - 3.0).abs() < f64::EPSILON);
    assert!((profile.win_loss_ratio - 2.0).abs() < f64::EPSILON);
    assert_eq!(profile.achievements.len(), 1);
    assert_eq!(profile.achievements[0].id, achievement.id);
    assert_eq!(
        profile.equipped_title.as_ref().map(|t| t.id),
        Some(title.id)
    );
    assert!(profile.badges.is_empty());
    assert!(profile.quests.is_empty());
    assert!(profile.owned_items.is_empty());

    Ok(())
}

/// Tests that an unequipped title is not reported on the profile.
#[tokio::test]
async fn ignores_unequipped_titles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = PlayerFactory::new(db).username("Steve").build().await?;

    TitleRepository::new(db).seed_defaults().await?;
    let title = TitleRepository::new(db).get_all().await?[0].clone();
    entity::player_title::ActiveModel {
        player_id: ActiveValue::Set(player.id),
        title_id: ActiveValue::Set(title.id),
        equipped: ActiveValue::Set(false),
        acquired_at: ActiveValue::Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let profile = PlayerRepository::new(db)
        .get_profile("Steve")
        .await?
        .expect("profile should exist");

    assert!(profile.equipped_title.is_none());

    Ok(())
}

/// Tests the zero-divisor ratio fallback for fresh players.
#[tokio::test]
async fn handles_zero_deaths_and_losses() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_player_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .username("Flawless")
        .kills(7)
        .wins(3)
        .build()
        .await?;

    let profile = PlayerRepository::new(db)
        .get_profile("Flawless")
        .await?
        .expect("profile should exist");

    assert!((profile.kill_death_ratio - 7.0).abs() < f64::EPSILON);
    assert!((profile.win_loss_ratio - 3.0).abs() < f64::EPSILON);

    Ok(())
}
