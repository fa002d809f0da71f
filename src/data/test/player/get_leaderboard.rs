use super::*;

/// Tests leaderboard ordering by experience.
///
/// Expected: players ranked 1-based in descending experience order
#[tokio::test]
async fn orders_by_experience_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .username("Bronze")
        .experience(1000)
        .build()
        .await?;
    PlayerFactory::new(db)
        .username("Gold")
        .experience(20000)
        .build()
        .await?;
    PlayerFactory::new(db)
        .username("Silver")
        .experience(8000)
        .build()
        .await?;

    let leaderboard = PlayerRepository::new(db).get_leaderboard(10).await?;

    let names: Vec<&str> = leaderboard
        .iter()
        .map(|entry| entry.username.as_str())
        .collect();
    assert_eq!(names, vec!["Gold", "Silver", "Bronze"]);
    assert_eq!(leaderboard[0].rank, 1);
    assert_eq!(leaderboard[2].rank, 3);

    Ok(())
}

/// Tests that wins break ties in experience.
#[tokio::test]
async fn breaks_experience_ties_by_wins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .username("FewerWins")
        .experience(5000)
        .wins(3)
        .build()
        .await?;
    PlayerFactory::new(db)
        .username("MoreWins")
        .experience(5000)
        .wins(9)
        .build()
        .await?;

    let leaderboard = PlayerRepository::new(db).get_leaderboard(10).await?;

    assert_eq!(leaderboard[0].username, "MoreWins");
    assert_eq!(leaderboard[1].username, "FewerWins");

    Ok(())
}

/// Tests that the limit caps the number of returned rows.
#[tokio::test]
async fn respects_row_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        PlayerFactory::new(db).build().await?;
    }

    let leaderboard = PlayerRepository::new(db).get_leaderboard(2).await?;

    assert_eq!(leaderboard.len(), 2);

    Ok(())
}

/// Tests that the computed level reflects accumulated experience.
#[tokio::test]
async fn computes_levels_for_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .username("Leveled")
        .experience(12500)
        .build()
        .await?;

    let leaderboard = PlayerRepository::new(db).get_leaderboard(1).await?;

    assert_eq!(leaderboard[0].level, 3);

    Ok(())
}
