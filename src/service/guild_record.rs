use sea_orm::DatabaseConnection;

use crate::{
    data::guild_record::GuildRecordRepository,
    error::AppError,
    model::guild_record::{FindOrCreateGuildRecordParam, GuildRecord},
    util::name::strip_discriminator,
};

pub struct GuildRecordService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRecordService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the guild record, creating it with both lists on first reference.
    ///
    /// The owner name is stored without the legacy `#0` discriminator.
    ///
    /// # Arguments
    /// - `param` - Guild ID plus the name and owner stored on creation
    ///
    /// # Returns
    /// - `Ok(GuildRecord)` - The existing or newly created record
    /// - `Err(AppError::DbErr)` - Database error during resolution
    pub async fn find_or_create(
        &self,
        param: FindOrCreateGuildRecordParam,
    ) -> Result<GuildRecord, AppError> {
        let param = FindOrCreateGuildRecordParam {
            owner_name: strip_discriminator(&param.owner_name),
            ..param
        };

        Ok(GuildRecordRepository::new(self.db)
            .find_or_create(param)
            .await?)
    }
}
