use super::*;

/// Tests that a guild-wide entry is found in the guild-wide scope only.
///
/// Expected: true guild-wide, false for any command
#[tokio::test]
async fn guild_wide_entry_matches_only_guild_scope() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .target_id("100")
        .build()
        .await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();

    let repo = AccessListRepository::new(db);

    assert!(
        repo.exists(guild_id, AccessListKind::Allow, TargetKind::Account, 100, None)
            .await?
    );
    assert!(
        !repo
            .exists(
                guild_id,
                AccessListKind::Allow,
                TargetKind::Account,
                100,
                Some("kick")
            )
            .await?
    );

    Ok(())
}

/// Tests that command scopes are independent.
///
/// Verifies that an entry scoped to `kick` does not match `ban` or the guild scope.
///
/// Expected: true for `kick` only
#[tokio::test]
async fn command_entry_matches_only_its_command() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .target_kind("role")
        .target_id("200")
        .command_name(Some("kick"))
        .build()
        .await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();

    let repo = AccessListRepository::new(db);
    let list = AccessListKind::Allow;

    assert!(
        repo.exists(guild_id, list, TargetKind::Role, 200, Some("kick"))
            .await?
    );
    assert!(
        !repo
            .exists(guild_id, list, TargetKind::Role, 200, Some("ban"))
            .await?
    );
    assert!(!repo.exists(guild_id, list, TargetKind::Role, 200, None).await?);

    Ok(())
}

/// Tests that list kind and target kind both take part in the match.
///
/// Expected: false for the deny list and for a different target kind
#[tokio::test]
async fn distinguishes_list_and_target_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .target_id("100")
        .build()
        .await?;
    let guild_id: u64 = guild.guild_id.parse().unwrap();

    let repo = AccessListRepository::new(db);

    assert!(
        !repo
            .exists(guild_id, AccessListKind::Deny, TargetKind::Account, 100, None)
            .await?
    );
    assert!(
        !repo
            .exists(guild_id, AccessListKind::Allow, TargetKind::Channel, 100, None)
            .await?
    );

    Ok(())
}
