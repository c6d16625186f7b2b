use crate::{
    data::{access_list::AccessListRepository, audit_action::AuditActionRepository},
    model::{
        access_list::{AccessEntryParam, AccessListKind},
        audit_action::{AuditActionType, CreateAuditActionParam},
        target::{Target, TargetKind},
    },
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete_by_case_number;
mod find_by_case_number;
mod get_by_guild_id;

fn create_param(guild_id: &str, action_type: AuditActionType) -> CreateAuditActionParam {
    CreateAuditActionParam {
        guild_id: guild_id.parse().unwrap(),
        target: Target {
            id: 100,
            name: "target".to_string(),
        },
        executor: Target {
            id: 200,
            name: "moderator".to_string(),
        },
        action_type,
        reason: Some("spamming".to_string()),
    }
}
