use super::*;

/// Tests creating a guild record on first reference.
///
/// Verifies that the guild row is created with the provided owner and name, and that
/// both an allow and a deny list are created alongside it.
///
/// Expected: Ok with record and two list rows
#[tokio::test]
async fn creates_guild_with_both_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = GuildRecordRepository::new(db)
        .find_or_create(param(123456789))
        .await?;

    assert_eq!(record.guild_id, 123456789);
    assert_eq!(record.guild_name, "Test Guild");
    assert_eq!(record.created_by_id, 1000);
    assert_eq!(record.created_by_name, "owner");

    let mut kinds: Vec<String> = entity::prelude::AccessList::find()
        .filter(entity::access_list::Column::GuildId.eq("123456789"))
        .all(db)
        .await?
        .into_iter()
        .map(|l| l.kind)
        .collect();
    kinds.sort();
    assert_eq!(kinds, vec!["allow".to_string(), "deny".to_string()]);

    Ok(())
}

/// Tests that resolving an existing guild leaves it untouched.
///
/// Verifies that a second call with a different name and owner returns the original
/// record and does not duplicate the guild or its lists.
///
/// Expected: Ok with original record, one guild row, two list rows
#[tokio::test]
async fn returns_existing_record_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRecordRepository::new(db);
    let first = repo.find_or_create(param(55)).await?;
    let second = repo
        .find_or_create(FindOrCreateGuildRecordParam {
            guild_id: 55,
            guild_name: "Renamed".to_string(),
            owner_id: 2000,
            owner_name: "someone else".to_string(),
        })
        .await?;

    assert_eq!(first, second);
    assert_eq!(entity::prelude::GuildRecord::find().all(db).await?.len(), 1);
    assert_eq!(entity::prelude::AccessList::find().all(db).await?.len(), 2);

    Ok(())
}

/// Tests that a guild missing one of its lists gets it back.
///
/// Verifies that a guild created without list rows has both lists after resolution.
///
/// Expected: Ok with two list rows
#[tokio::test]
async fn restores_missing_lists() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_record::GuildRecordFactory::new(db)
        .guild_id("77")
        .without_lists()
        .build()
        .await?;

    GuildRecordRepository::new(db)
        .find_or_create(param(77))
        .await?;

    let lists = entity::prelude::AccessList::find()
        .filter(entity::access_list::Column::GuildId.eq(guild.guild_id))
        .all(db)
        .await?;
    assert_eq!(lists.len(), 2);

    Ok(())
}

/// Tests resolving a guild that already has one of its two lists.
///
/// Verifies that the conflicting allow list row is skipped rather than failing the
/// unique (guild_id, kind) index, and that it keeps its latest case number.
///
/// Expected: Ok with two list rows, allow list still on case 4
#[tokio::test]
async fn skips_existing_list_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_access_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::guild_record::GuildRecordFactory::new(db)
        .guild_id("88")
        .without_lists()
        .build()
        .await?;

    entity::prelude::AccessList::insert(entity::access_list::ActiveModel {
        guild_id: ActiveValue::Set(guild.guild_id.clone()),
        kind: ActiveValue::Set("allow".to_string()),
        case_number: ActiveValue::Set(Some(4)),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    })
    .exec(db)
    .await?;

    GuildRecordRepository::new(db)
        .find_or_create(param(88))
        .await?;

    let lists = entity::prelude::AccessList::find()
        .filter(entity::access_list::Column::GuildId.eq(guild.guild_id))
        .all(db)
        .await?;
    assert_eq!(lists.len(), 2);

    let allow = lists.iter().find(|l| l.kind == "allow").unwrap();
    assert_eq!(allow.case_number, Some(4));

    Ok(())
}
