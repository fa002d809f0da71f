use super::*;

/// Tests that an empty player table yields all-zero totals.
#[tokio::test]
async fn empty_table_yields_zero_totals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stats = PlayerRepository::new(db).get_site_statistics().await?;

    assert_eq!(stats.total_players, 0);
    assert_eq!(stats.total_kills, 0);
    assert_eq!(stats.total_deaths, 0);
    assert_eq!(stats.total_wins, 0);
    assert_eq!(stats.total_beds_broken, 0);

    Ok(())
}

/// Tests that totals sum across all players.
#[tokio::test]
async fn sums_totals_across_players() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PlayerFactory::new(db)
        .kills(10)
        .deaths(5)
        .wins(2)
        .beds_broken(4)
        .build()
        .await?;
    PlayerFactory::new(db)
        .kills(30)
        .deaths(15)
        .wins(8)
        .beds_broken(6)
        .build()
        .await?;

    let stats = PlayerRepository::new(db).get_site_statistics().await?;

    assert_eq!(stats.total_players, 2);
    assert_eq!(stats.total_kills, 40);
    assert_eq!(stats.total_deaths, 20);
    assert_eq!(stats.total_wins, 10);
    assert_eq!(stats.total_beds_broken, 10);

    Ok(())
}
