use super::*;

/// Tests resolving the case number of a list's latest mutation.
///
/// Expected: Ok(Some) naming the guild and the mutated list
#[tokio::test]
async fn finds_list_by_latest_case_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    let repo = AccessListRepository::new(db);
    let case_number = repo
        .add(&entry_param(
            &guild.guild_id,
            AccessListKind::Deny,
            TargetKind::Role,
            200,
            None,
        ))
        .await?;

    let found = repo.find_by_case_number(case_number).await?;

    assert_eq!(
        found,
        Some((guild.guild_id.parse().unwrap(), AccessListKind::Deny))
    );

    Ok(())
}

/// Tests that superseded case numbers no longer resolve to the list.
///
/// Expected: Ok(None) for the first case number after a second mutation
#[tokio::test]
async fn superseded_case_number_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    let repo = AccessListRepository::new(db);
    let param = entry_param(
        &guild.guild_id,
        AccessListKind::Allow,
        TargetKind::Account,
        100,
        None,
    );
    let first = repo.add(&param).await?;
    repo.remove(&param).await?;

    assert!(repo.find_by_case_number(first).await?.is_none());

    Ok(())
}
