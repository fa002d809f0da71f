use super::*;

/// Tests clan summaries with leader names and member counts.
///
/// One clan has two members, the other none; both report their leader's
/// username and the grouped member count.
#[tokio::test]
async fn reports_leaders_and_member_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .with_table(entity::prelude::Clan)
        .with_table(entity::prelude::ClanMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = PlayerFactory::new(db).username("Alpha").build().await?;
    let second = PlayerFactory::new(db).username("Beta").build().await?;
    let loner = PlayerFactory::new(db).username("Gamma").build().await?;

    let crowded = create_clan(db, leader.id).await?;
    add_member(db, crowded.id, leader.id, "leader").await?;
    add_member(db, crowded.id, second.id, "member").await?;

    let empty = create_clan(db, loner.id).await?;

    let summaries = ClanRepository::new(db).get_summaries().await?;

    assert_eq!(summaries.len(), 2);

    let crowded_summary = summaries
        .iter()
        .find(|summary| summary.clan.id == crowded.id)
        .expect("crowded clan missing");
    assert_eq!(crowded_summary.leader_name.as_deref(), Some("Alpha"));
    assert_eq!(crowded_summary.member_count, 2);

    let empty_summary = summaries
        .iter()
        .find(|summary| summary.clan.id == empty.id)
        .expect("empty clan missing");
    assert_eq!(empty_summary.leader_name.as_deref(), Some("Gamma"));
    assert_eq!(empty_summary.member_count, 0);

    Ok(())
}

/// Tests that summaries come back ordered by clan name.
#[tokio::test]
async fn orders_by_clan_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Player)
        .with_table(entity::prelude::Clan)
        .with_table(entity::prelude::ClanMember)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let leader = PlayerFactory::new(db).build().await?;
    create_clan(db, leader.id).await?;
    create_clan(db, leader.id).await?;

    let summaries = ClanRepository::new(db).get_summaries().await?;

    let names: Vec<&str> = summaries
        .iter()
        .map(|summary| summary.clan.name.as_str())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    Ok(())
}
