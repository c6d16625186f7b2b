use super::*;

/// Tests listing the audit actions of a guild.
///
/// Verifies that only actions of the requested guild are returned, in case number order.
///
/// Expected: Ok with the two actions of the guild
#[tokio::test]
async fn returns_guild_actions_in_case_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    let other = factory::create_guild_record(db).await?;
    factory::audit_action::AuditActionFactory::new(db, &guild.guild_id)
        .case_number(20)
        .build()
        .await?;
    factory::audit_action::AuditActionFactory::new(db, &guild.guild_id)
        .case_number(10)
        .build()
        .await?;
    factory::create_audit_action(db, &other.guild_id).await?;

    let actions = AuditActionRepository::new(db)
        .get_by_guild_id(guild.guild_id.parse().unwrap())
        .await?;

    let numbers: Vec<i64> = actions.iter().map(|a| a.case_number).collect();
    assert_eq!(numbers, vec![10, 20]);

    Ok(())
}
