use crate::{
    data::guild_record::GuildRecordRepository,
    model::guild_record::FindOrCreateGuildRecordParam,
};
use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod find_or_create;

fn param(guild_id: u64) -> FindOrCreateGuildRecordParam {
    FindOrCreateGuildRecordParam {
        guild_id,
        guild_name: "Test Guild".to_string(),
        owner_id: 1000,
        owner_name: "owner".to_string(),
    }
}
