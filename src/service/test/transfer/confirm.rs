use super::*;

/// Tests the full conflict and move flow.
///
/// An account on the allow list is added to the deny list, which prompts. Confirming
/// the prompt removes it from the allow list before adding it to the deny list.
///
/// Expected: removal under case 2, addition under case 3, target only on the deny list
#[tokio::test]
async fn moves_target_after_prompt() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lists = AccessListService::new(db);

    let add = |list| ModifySelectionParam {
        guild: guild_param(),
        target: Target {
            id: 10,
            name: "Alice".to_string(),
        },
        kind: TargetKind::Account,
        list,
        action: AccessAction::Add,
        command_name: None,
        transfer: false,
    };

    assert_eq!(
        lists
            .modify_selection(add(AccessListKind::Allow))
            .await?
            .case_number(),
        Some(1)
    );

    let payload = match lists.modify_selection(add(AccessListKind::Deny)).await? {
        ModifyOutcome::ConflictPrompt { payload, .. } => payload,
        other => panic!("Expected ConflictPrompt, got {:?}", other),
    };

    let outcome = MoveService::new(db)
        .confirm(ConfirmMoveParam {
            guild: guild_param(),
            payload,
            target_name: Some("Alice#0".to_string()),
        })
        .await?;

    assert_eq!(outcome.removed_case, Some(2));
    assert_eq!(outcome.added_case, Some(3));
    assert_eq!(outcome.context.target.name, "Alice");

    assert!(
        !lists
            .exists(GUILD_ID, AccessListKind::Allow, TargetKind::Account, 10, None)
            .await?
    );
    assert!(
        lists
            .exists(GUILD_ID, AccessListKind::Deny, TargetKind::Account, 10, None)
            .await?
    );

    let allow = lists.get(GUILD_ID, AccessListKind::Allow).await?;
    let deny = lists.get(GUILD_ID, AccessListKind::Deny).await?;
    assert_eq!(allow.case_number, Some(2));
    assert_eq!(deny.case_number, Some(3));

    Ok(())
}

/// Tests that a move without a live name keeps the stored name.
///
/// Expected: the moved entry carries the name stored on the opposite list
#[tokio::test]
async fn falls_back_to_stored_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_record::GuildRecordFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .build()
        .await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .list_kind("deny")
        .target_id("10")
        .name("Stored Name")
        .command_name(Some("kick"))
        .build()
        .await?;

    let outcome = MoveService::new(db)
        .confirm(confirm_param(AccessListKind::Allow, 10, Some("kick"), None))
        .await?;

    assert_eq!(outcome.context.target.name, "Stored Name");

    let allow = AccessListService::new(db)
        .get(GUILD_ID, AccessListKind::Allow)
        .await?;
    let scoped = allow.selection(Some("kick")).unwrap();
    assert_eq!(scoped.accounts[0].name, "Stored Name");

    Ok(())
}

/// Tests confirming the same prompt twice.
///
/// The second click sees the target already moved and must not add it again.
///
/// Expected: second confirm commits nothing and consumes no case numbers
#[tokio::test]
async fn stale_confirmation_commits_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_record::GuildRecordFactory::new(db)
        .guild_id(GUILD_ID.to_string())
        .build()
        .await?;
    factory::access_entry::AccessEntryFactory::new(db, &guild.guild_id)
        .target_id("10")
        .build()
        .await?;

    let service = MoveService::new(db);
    let first = service
        .confirm(confirm_param(AccessListKind::Deny, 10, None, Some("Bob")))
        .await?;
    let second = service
        .confirm(confirm_param(AccessListKind::Deny, 10, None, Some("Bob")))
        .await?;

    assert_eq!((first.removed_case, first.added_case), (Some(1), Some(2)));
    assert_eq!((second.removed_case, second.added_case), (None, None));

    let deny = AccessListService::new(db)
        .get(GUILD_ID, AccessListKind::Deny)
        .await?;
    assert_eq!(deny.guild_wide.accounts.len(), 1);

    Ok(())
}

/// Tests confirming a prompt after the target already left the opposite list.
///
/// Expected: no removal, the addition still commits
#[tokio::test]
async fn skips_removal_when_already_gone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = MoveService::new(db)
        .confirm(confirm_param(AccessListKind::Allow, 10, None, None))
        .await?;

    assert_eq!(outcome.removed_case, None);
    assert_eq!(outcome.added_case, Some(1));
    assert_eq!(outcome.context.target.name, "10");

    Ok(())
}
