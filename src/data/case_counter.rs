//! Shared case counter.
//!
//! One counter row feeds both access list mutations and audit actions. Allocation is a
//! single upsert statement, so the increment is atomic at the database level and
//! strictly increasing for every caller that shares the database.

use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

/// Name of the counter row shared by all guilds.
const SHARED_COUNTER: &str = "";

/// Repository for the case counter.
///
/// Generic over the connection so the allocation can join the caller's transaction.
pub struct CaseCounterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CaseCounterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Allocates the next case number.
    ///
    /// Creates the counter at 1 on first use, otherwise increments it in place and
    /// returns the post-increment value.
    ///
    /// # Returns
    /// - `Ok(i64)` - The newly allocated case number
    /// - `Err(DbErr)` - Database error during the upsert
    pub async fn next_case_number(&self) -> Result<i64, DbErr> {
        let counter = entity::prelude::CaseCounter::insert(entity::case_counter::ActiveModel {
            name: ActiveValue::Set(SHARED_COUNTER.to_string()),
            seq: ActiveValue::Set(1),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::case_counter::Column::Name)
                .value(entity::case_counter::Column::Seq, Expr::cust("seq + 1"))
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(counter.seq)
    }

    /// Returns the last allocated case number, `0` if none has been allocated yet.
    pub async fn current(&self) -> Result<i64, DbErr> {
        let counter = entity::prelude::CaseCounter::find()
            .filter(entity::case_counter::Column::Name.eq(SHARED_COUNTER))
            .one(self.db)
            .await?;

        Ok(counter.map(|c| c.seq).unwrap_or(0))
    }
}
