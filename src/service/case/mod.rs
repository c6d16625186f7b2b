//! Resolves case numbers to what they were assigned to.

pub mod render;

use sea_orm::DatabaseConnection;

use crate::{
    data::{access_list::AccessListRepository, audit_action::AuditActionRepository},
    error::AppError,
    model::case::CaseRecord,
};

pub struct CaseLookupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CaseLookupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds what a case number refers to within a guild.
    ///
    /// Lists only remember the case number of their latest mutation, so older list
    /// cases resolve to `None`. Case numbers are shared by every guild; a case that
    /// belongs to another guild also resolves to `None`.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the lookup is made from
    /// - `case_number` - Case number to resolve
    ///
    /// # Returns
    /// - `Ok(Some(CaseRecord))` - The list or audit action carrying the case number
    /// - `Ok(None)` - Nothing in the guild currently carries the case number
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn find(
        &self,
        guild_id: u64,
        case_number: i64,
    ) -> Result<Option<CaseRecord>, AppError> {
        let record = match AccessListRepository::new(self.db)
            .find_by_case_number(case_number)
            .await?
        {
            Some((guild_id, kind)) => Some(CaseRecord::AccessList { guild_id, kind }),
            None => AuditActionRepository::new(self.db)
                .find_by_case_number(case_number)
                .await?
                .map(CaseRecord::Action),
        };

        Ok(record.filter(|record| record.guild_id() == guild_id))
    }
}
