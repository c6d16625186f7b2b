use super::*;

/// Tests loading a list with entries in every scope.
///
/// Verifies that guild-wide entries land in the guild-wide selection by kind and that
/// command entries are grouped per command name in insertion order.
///
/// Expected: Ok(Some) with grouped selections
#[tokio::test]
async fn loads_list_with_grouped_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .target_kind("account")
        .target_id("100")
        .build()
        .await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .target_kind("channel")
        .target_id("300")
        .build()
        .await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .target_kind("role")
        .target_id("200")
        .command_name(Some("kick"))
        .build()
        .await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .target_kind("role")
        .target_id("201")
        .command_name(Some("kick"))
        .build()
        .await?;

    let list = AccessListRepository::new(db)
        .get(guild.guild_id.parse().unwrap(), AccessListKind::Allow)
        .await?
        .unwrap();

    assert_eq!(list.kind, AccessListKind::Allow);
    assert_eq!(list.case_number, None);
    assert_eq!(list.guild_wide.accounts[0].id, 100);
    assert_eq!(list.guild_wide.channels[0].id, 300);
    assert!(list.guild_wide.roles.is_empty());
    assert_eq!(list.commands.len(), 1);
    let kick: Vec<u64> = list.commands[0]
        .selection
        .roles
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(kick, vec![200, 201]);

    Ok(())
}

/// Tests that entries of the other list are not loaded.
///
/// Expected: Ok(Some) with an empty deny list
#[tokio::test]
async fn excludes_entries_of_other_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    factory::create_access_entry(db, &guild.guild_id).await?;

    let list = AccessListRepository::new(db)
        .get(guild.guild_id.parse().unwrap(), AccessListKind::Deny)
        .await?
        .unwrap();

    assert_eq!(list.guild_wide, AccessSelection::default());
    assert!(list.commands.is_empty());

    Ok(())
}

/// Tests loading a list for a guild that was never referenced.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let list = AccessListRepository::new(db)
        .get(4242, AccessListKind::Allow)
        .await?;

    assert!(list.is_none());

    Ok(())
}
