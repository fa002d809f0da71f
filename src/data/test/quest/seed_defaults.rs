use super::*;

/// Tests seeding the default quests into an empty table.
///
/// Expected: Seeded outcome, both daily and weekly quests present
#[tokio::test]
async fn seeds_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Quest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = QuestRepository::new(db);
    let outcome = repo.seed_defaults().await?;

    let count = repo.count().await?;
    assert!(matches!(outcome, SeedOutcome::Seeded(n) if n == count));
    assert!(count > 0);

    let quests = repo.get_active().await?;
    assert!(quests.iter().any(|quest| quest.quest_type == "daily"));
    assert!(quests.iter().any(|quest| quest.quest_type == "weekly"));

    Ok(())
}

/// Tests that a populated table is left untouched.
///
/// Expected: AlreadyPopulated outcome and no new rows
#[tokio::test]
async fn skips_populated_table() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Quest)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    QuestFactory::new(db).name("Pre-existing").build().await?;

    let repo = QuestRepository::new(db);
    let outcome = repo.seed_defaults().await?;

    assert!(matches!(outcome, SeedOutcome::AlreadyPopulated));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}
