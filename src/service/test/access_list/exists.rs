use super::*;

/// Tests that command-scoped entries are isolated from other scopes.
///
/// Adds a role to the allow list for `kick` only.
///
/// Expected: present for `kick`, absent for `ban` and guild-wide
#[tokio::test]
async fn command_scopes_are_isolated() -> Result<(), AppError> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AccessListService::new(db);

    service
        .modify_selection(modify(
            AccessListKind::Allow,
            AccessAction::Add,
            TargetKind::Role,
            20,
            Some("kick"),
        ))
        .await?;

    let allow = AccessListKind::Allow;
    assert!(service.exists(GUILD_ID, allow, TargetKind::Role, 20, Some("kick")).await?);
    assert!(!service.exists(GUILD_ID, allow, TargetKind::Role, 20, Some("ban")).await?);
    assert!(!service.exists(GUILD_ID, allow, TargetKind::Role, 20, None).await?);

    Ok(())
}
