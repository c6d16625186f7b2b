use super::*;

/// Tests finding an action by case number.
///
/// Expected: Ok(Some) with matching action type
#[tokio::test]
async fn finds_action_by_case_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    factory::audit_action::AuditActionFactory::new(db, &guild.guild_id)
        .action_type("mute")
        .case_number(7)
        .build()
        .await?;

    let found = AuditActionRepository::new(db).find_by_case_number(7).await?;

    assert_eq!(found.unwrap().action_type, AuditActionType::Mute);

    Ok(())
}

/// Tests that a stored action type outside the known set is reported.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_action_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    factory::audit_action::AuditActionFactory::new(db, &guild.guild_id)
        .action_type("warn")
        .case_number(8)
        .build()
        .await?;

    let result = AuditActionRepository::new(db).find_by_case_number(8).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
