use super::*;

/// Tests that retired quests are excluded from the active listing.
#[tokio::test]
async fn excludes_inactive_quests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Quest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    QuestFactory::new(db).name("Live").build().await?;
    QuestFactory::new(db)
        .name("Retired")
        .active(false)
        .build()
        .await?;

    let quests = QuestRepository::new(db).get_active().await?;

    assert_eq!(quests.len(), 1);
    assert_eq!(quests[0].name, "Live");

    Ok(())
}

/// Tests the daily-before-weekly ordering of the active listing.
#[tokio::test]
async fn orders_daily_before_weekly() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Quest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    QuestFactory::new(db)
        .name("Weekly Quest")
        .quest_type("weekly")
        .build()
        .await?;
    QuestFactory::new(db)
        .name("Daily Quest")
        .quest_type("daily")
        .build()
        .await?;

    let quests = QuestRepository::new(db).get_active().await?;

    assert_eq!(quests[0].quest_type, "daily");
    assert_eq!(quests[1].quest_type, "weekly");

    Ok(())
}
