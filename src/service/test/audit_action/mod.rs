use super::{guild_param, GUILD_ID};
use crate::{
    error::AppError,
    model::{
        audit_action::{AuditActionType, CreateAuditActionParam},
        target::Target,
    },
    service::audit_action::AuditActionService,
};
use test_utils::builder::TestBuilder;


fn create_param(action_type: AuditActionType) -> CreateAuditActionParam {
    CreateAuditActionParam {
        guild_id: 0,
        target: Target {
            id: 10,
            name: "troublemaker#0".to_string(),
        },
        executor: Target {
            id: 20,
            name: "moderator#0".to_string(),
        },
        action_type,
        reason: None,
    }
}
