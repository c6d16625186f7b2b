use crate::model::guild_record::FindOrCreateGuildRecordParam;

mod access_list;
mod audit_action;
mod transfer;
mod view;

const GUILD_ID: u64 = 900_000_000_000_000_001;

fn guild_param() -> FindOrCreateGuildRecordParam {
    FindOrCreateGuildRecordParam {
        guild_id: GUILD_ID,
        guild_name: "Test Guild".to_string(),
        owner_id: 900_000_000_000_000_002,
        owner_name: "owner#0".to_string(),
    }
}
