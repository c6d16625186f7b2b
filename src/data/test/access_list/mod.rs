use crate::{
    data::access_list::AccessListRepository,
    model::{
        access_list::{AccessEntryParam, AccessListKind, AccessSelection},
        target::{Target, TargetKind},
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod exists;
mod find_by_case_number;
mod find_entry;
mod get;

fn entry_param(
    guild_id: &str,
    list: AccessListKind,
    kind: TargetKind,
    target_id: u64,
    command_name: Option<&str>,
) -> AccessEntryParam {
    AccessEntryParam {
        guild_id: guild_id.parse().unwrap(),
        list,
        kind,
        target: Target {
            id: target_id,
            name: format!("Target {}", target_id),
        },
        command_name: command_name.map(str::to_string),
    }
}

// Test-only lookup helper, mirroring the one in `model::access_list` tests.
impl crate::model::access_list::AccessList {
    fn exists(&self, kind: TargetKind, id: u64, command_name: Option<&str>) -> bool {
        self.selection(command_name)
            .is_some_and(|selection| selection.contains(kind, id))
    }
}
