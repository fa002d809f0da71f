use super::*;

/// Tests finding an existing player by exact username.
#[tokio::test]
async fn finds_existing_player() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .username("Herobrine")
        .kills(42)
        .build()
        .await?;

    let found = PlayerRepository::new(db)
        .find_by_username("Herobrine")
        .await?;

    let player = found.expect("player should exist");
    assert_eq!(player.username, "Herobrine");
    assert_eq!(player.kills, 42);

    Ok(())
}

/// Tests that an unknown username yields None.
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = PlayerRepository::new(db).find_by_username("Nobody").await?;

    assert!(found.is_none());

    Ok(())
}
