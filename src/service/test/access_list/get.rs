use super::*;

/// Tests loading a list of a guild that was never referenced.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = AccessListService::new(db)
        .get(GUILD_ID, AccessListKind::Allow)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests loading a list after a committed add.
///
/// Expected: the list holds the account and carries the case number
#[tokio::test]
async fn returns_list_with_entries() -> Result<(), AppError> {
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

    let list = service.get(GUILD_ID, AccessListKind::Allow).await?;

    assert_eq!(list.case_number, Some(1));
    assert_eq!(list.guild_wide.accounts.len(), 1);
    assert_eq!(list.guild_wide.accounts[0].name, "Target 10");

    Ok(())
}
