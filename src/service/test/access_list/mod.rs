use super::{guild_param, GUILD_ID};
use crate::{
    error::AppError,
    model::{
        access_list::{AccessAction, AccessListKind, AccessSelection, ModifySelectionParam},
        outcome::ModifyOutcome,
        target::{Target, TargetKind},
    },
    service::access_list::AccessListService,
};
use sea_orm::EntityTrait;
use test_utils::builder::TestBuilder;

mod exists;
mod get;
mod modify_selection;

fn modify(
    list: AccessListKind,
    action: AccessAction,
    kind: TargetKind,
    target_id: u64,
    command_name: Option<&str>,
) -> ModifySelectionParam {
    ModifySelectionParam {
        guild: guild_param(),
        target: Target {
            id: target_id,
            name: format!("Target {}#0", target_id),
        },
        kind,
        list,
        action,
        command_name: command_name.map(str::to_string),
        transfer: false,
    }
}
