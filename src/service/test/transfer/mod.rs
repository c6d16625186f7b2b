use super::{guild_param, GUILD_ID};
use crate::{
    error::AppError,
    model::{
        access_list::{AccessAction, AccessListKind, ConfirmMoveParam, ModifySelectionParam},
        outcome::ModifyOutcome,
        payload::MovePayload,
        target::{Target, TargetKind},
    },
    service::access_list::{transfer::MoveService, AccessListService},
};
use test_utils::{builder::TestBuilder, factory};

mod confirm;

fn confirm_param(
    list: AccessListKind,
    target_id: u64,
    command_name: Option<&str>,
    target_name: Option<&str>,
) -> ConfirmMoveParam {
    ConfirmMoveParam {
        guild: guild_param(),
        payload: MovePayload {
            list,
            kind: TargetKind::Account,
            target_id,
            command_name: command_name.map(str::to_string),
        },
        target_name: target_name.map(str::to_string),
    }
}
