use super::*;

fn target() -> Target {
    Target {
        id: 10,
        name: "Alice".to_string(),
    }
}

/// Tests resolving list and audit case numbers after interleaved writes.
///
/// Case 1 is a deny list add, case 2 a ban, case 3 an allow list add.
///
/// Expected: 2 resolves to the ban, 3 to the allow list, 1 to the deny list
#[tokio::test]
async fn resolves_lists_and_actions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lists = AccessListService::new(db);

    let add = |list, kind| ModifySelectionParam {
        guild: guild_param(),
        target: target(),
        kind,
        list,
        action: AccessAction::Add,
        command_name: None,
        transfer: false,
    };

    lists
        .modify_selection(add(AccessListKind::Deny, TargetKind::Role))
        .await?;
    AuditActionService::new(db)
        .create(
            guild_param(),
            CreateAuditActionParam {
                guild_id: GUILD_ID,
                target: target(),
                executor: Target {
                    id: 20,
                    name: "moderator".to_string(),
                },
                action_type: AuditActionType::Ban,
                reason: Some("raid".to_string()),
            },
        )
        .await?;
    lists
        .modify_selection(add(AccessListKind::Allow, TargetKind::Channel))
        .await?;

    let lookup = CaseLookupService::new(db);

    assert_eq!(
        lookup.find(GUILD_ID, 1).await?,
        Some(CaseRecord::AccessList {
            guild_id: GUILD_ID,
            kind: AccessListKind::Deny
        })
    );
    assert!(matches!(
        lookup.find(GUILD_ID, 2).await?,
        Some(CaseRecord::Action(action)) if action.action_type == AuditActionType::Ban
    ));
    assert_eq!(
        lookup.find(GUILD_ID, 3).await?,
        Some(CaseRecord::AccessList {
            guild_id: GUILD_ID,
            kind: AccessListKind::Allow
        })
    );
    assert_eq!(lookup.find(GUILD_ID, 4).await?, None);

    Ok(())
}

/// Tests that a list only answers for its latest case.
///
/// Expected: the superseded case resolves to None
#[tokio::test]
async fn superseded_list_case_is_gone() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let lists = AccessListService::new(db);

    for action in [AccessAction::Add, AccessAction::Remove] {
        lists
            .modify_selection(ModifySelectionParam {
                guild: guild_param(),
                target: target(),
                kind: TargetKind::Account,
                list: AccessListKind::Allow,
                action,
                command_name: None,
                transfer: false,
            })
            .await?;
    }

    let lookup = CaseLookupService::new(db);

    assert_eq!(lookup.find(GUILD_ID, 1).await?, None);
    assert!(lookup.find(GUILD_ID, 2).await?.is_some());

    Ok(())
}

/// Tests looking up a case that belongs to another guild.
///
/// Expected: None from the other guild, Some from the owning guild
#[tokio::test]
async fn hides_cases_of_other_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    AccessListService::new(db)
        .modify_selection(ModifySelectionParam {
            guild: guild_param(),
            target: target(),
            kind: TargetKind::Account,
            list: AccessListKind::Deny,
            action: AccessAction::Add,
            command_name: None,
            transfer: false,
        })
        .await?;

    let lookup = CaseLookupService::new(db);

    assert_eq!(lookup.find(GUILD_ID + 1, 1).await?, None);
    assert!(lookup.find(GUILD_ID, 1).await?.is_some());

    Ok(())
}
