//! Case counter seeding.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts the shared case counter row with the given current value.
///
/// The next allocated case number will be `seq + 1`.
pub async fn seed_case_counter(
    db: &DatabaseConnection,
    seq: i64,
) -> Result<entity::case_counter::Model, DbErr> {
    entity::case_counter::ActiveModel {
        name: ActiveValue::Set(String::new()),
        seq: ActiveValue::Set(seq),
        ..Default::default()
    }
    .insert(db)
    .await
}
