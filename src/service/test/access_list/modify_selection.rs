use super::*;

/// Tests a plain add to an empty list.
///
/// Expected: Committed with case number 1, target name stored without `#0`
#[tokio::test]
async fn commits_add() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AccessListService::new(db);

    let outcome = service
        .modify_selection(modify(
            AccessListKind::Allow,
            AccessAction::Add,
            TargetKind::Account,
            10,
            None,
        ))
        .await?;

    match outcome {
        ModifyOutcome::Committed {
            context,
            action,
            case_number,
        } => {
            assert_eq!(action, AccessAction::Add);
            assert_eq!(case_number, 1);
            assert_eq!(context.target.name, "Target 10");
        }
        other => panic!("Expected Committed, got {:?}", other),
    }

    assert!(
        service
            .exists(GUILD_ID, AccessListKind::Allow, TargetKind::Account, 10, None)
            .await?
    );

    Ok(())
}

/// Tests adding a target that is already on the list.
///
/// Expected: AlreadyPresent, no entry added and no case number consumed
#[tokio::test]
async fn rejects_duplicate_add() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AccessListService::new(db);
    let param = modify(
        AccessListKind::Deny,
        AccessAction::Add,
        TargetKind::Channel,
        30,
        None,
    );

    service.modify_selection(param.clone()).await?;
    let outcome = service.modify_selection(param).await?;

    assert!(matches!(outcome, ModifyOutcome::AlreadyPresent(_)));
    assert_eq!(outcome.case_number(), None);
    assert_eq!(entity::prelude::AccessEntry::find().all(db).await?.len(), 1);

    let counter = entity::prelude::CaseCounter::find().all(db).await?;
    assert_eq!(counter[0].seq, 1);

    Ok(())
}

/// Tests removing a channel that was never added.
///
/// Expected: NotPresent, no case number consumed
#[tokio::test]
async fn rejects_missing_remove() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = AccessListService::new(db)
        .modify_selection(modify(
            AccessListKind::Allow,
            AccessAction::Remove,
            TargetKind::Channel,
            30,
            None,
        ))
        .await?;

    assert!(matches!(outcome, ModifyOutcome::NotPresent(_)));
    assert!(entity::prelude::CaseCounter::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests removing a target that is on the list.
///
/// Expected: Committed remove with the next case number, target gone
#[tokio::test]
async fn commits_remove() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AccessListService::new(db);

    service
        .modify_selection(modify(
            AccessListKind::Deny,
            AccessAction::Add,
            TargetKind::Role,
            20,
            Some("ban"),
        ))
        .await?;
    let outcome = service
        .modify_selection(modify(
            AccessListKind::Deny,
            AccessAction::Remove,
            TargetKind::Role,
            20,
            Some("ban"),
        ))
        .await?;

    assert_eq!(outcome.case_number(), Some(2));
    assert!(
        !service
            .exists(GUILD_ID, AccessListKind::Deny, TargetKind::Role, 20, Some("ban"))
            .await?
    );

    Ok(())
}

/// Tests adding a target that sits on the opposite list.
///
/// Verifies that nothing is mutated and the prompt carries the move payload for the
/// requested list.
///
/// Expected: ConflictPrompt, allow entry kept, deny list untouched
#[tokio::test]
async fn prompts_on_opposite_list() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AccessListService::new(db);

    service
        .modify_selection(modify(
            AccessListKind::Allow,
            AccessAction::Add,
            TargetKind::Account,
            10,
            None,
        ))
        .await?;
    let outcome = service
        .modify_selection(modify(
            AccessListKind::Deny,
            AccessAction::Add,
            TargetKind::Account,
            10,
            None,
        ))
        .await?;

    match &outcome {
        ModifyOutcome::ConflictPrompt { payload, .. } => {
            assert_eq!(payload.list, AccessListKind::Deny);
            assert_eq!(payload.kind, TargetKind::Account);
            assert_eq!(payload.target_id, 10);
            assert_eq!(payload.command_name, None);
        }
        other => panic!("Expected ConflictPrompt, got {:?}", other),
    }

    let deny = service.get(GUILD_ID, AccessListKind::Deny).await?;
    assert_eq!(deny.guild_wide, AccessSelection::default());
    assert_eq!(deny.case_number, None);

    Ok(())
}

/// Tests that a conflict in another command scope does not prompt.
///
/// Expected: Committed, the target is on both lists in different scopes
#[tokio::test]
async fn other_scope_does_not_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AccessListService::new(db);

    service
        .modify_selection(modify(
            AccessListKind::Allow,
            AccessAction::Add,
            TargetKind::Account,
            10,
            Some("kick"),
        ))
        .await?;
    let outcome = service
        .modify_selection(modify(
            AccessListKind::Deny,
            AccessAction::Add,
            TargetKind::Account,
            10,
            Some("ban"),
        ))
        .await?;

    assert!(matches!(outcome, ModifyOutcome::Committed { .. }));

    Ok(())
}

/// Tests that a transfer half skips the guards.
///
/// Expected: Committed even though the target sits on the opposite list
#[tokio::test]
async fn transfer_skips_guards() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AccessListService::new(db);

    service
        .modify_selection(modify(
            AccessListKind::Allow,
            AccessAction::Add,
            TargetKind::Account,
            10,
            None,
        ))
        .await?;

    let mut param = modify(
        AccessListKind::Deny,
        AccessAction::Add,
        TargetKind::Account,
        10,
        None,
    );
    param.transfer = true;
    let outcome = service.modify_selection(param).await?;

    assert_eq!(outcome.case_number(), Some(2));

    Ok(())
}
