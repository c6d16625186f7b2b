use super::*;

/// Tests finding the stored entry of a target.
///
/// Expected: Ok(Some) carrying the name captured at add time
#[tokio::test]
async fn finds_entry_with_stored_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .list_kind("deny")
        .target_id("100")
        .name("Alice")
        .build()
        .await?;

    let entry = AccessListRepository::new(db)
        .find_entry(
            guild.guild_id.parse().unwrap(),
            AccessListKind::Deny,
            TargetKind::Account,
            100,
            None,
        )
        .await?
        .unwrap();

    assert_eq!(entry.target.name, "Alice");
    assert_eq!(entry.list, AccessListKind::Deny);
    assert_eq!(entry.command_name, None);

    Ok(())
}

/// Tests looking up a target that is not on the list.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_absent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;

    let entry = AccessListRepository::new(db)
        .find_entry(
            guild.guild_id.parse().unwrap(),
            AccessListKind::Allow,
            TargetKind::Channel,
            1,
            None,
        )
        .await?;

    assert!(entry.is_none());

    Ok(())
}
