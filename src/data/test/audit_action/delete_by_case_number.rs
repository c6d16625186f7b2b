use super::*;

/// Tests deleting an action by case number.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_action() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild_record(db).await?;
    factory::audit_action::AuditActionFactory::new(db, &guild.guild_id)
        .case_number(3)
        .build()
        .await?;

    let deleted = AuditActionRepository::new(db)
        .delete_by_case_number(3)
        .await?;

    assert!(deleted);
    assert!(entity::prelude::AuditAction::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a case number no action carries.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_when_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = AuditActionRepository::new(db)
        .delete_by_case_number(3)
        .await?;

    assert!(!deleted);

    Ok(())
}
