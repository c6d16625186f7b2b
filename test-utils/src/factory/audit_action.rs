//! Audit action factory for creating moderation actions without going through the
//! case numbering service.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test audit actions.
///
/// The case number defaults to a unique generated value; set it explicitly when a test
/// needs to look the action up by case number.
pub struct AuditActionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    target_id: String,
    target_name: String,
    executor_id: String,
    executor_name: String,
    action_type: String,
    reason: Option<String>,
    case_number: i64,
}

impl<'a> AuditActionFactory<'a> {
    /// Creates a new AuditActionFactory with default values.
    ///
    /// Defaults:
    /// - action_type: `"kick"`
    /// - reason: `None`
    /// - target / executor: generated ids with `"target"` / `"moderator"` names
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: guild_id.to_string(),
            target_id: id.to_string(),
            target_name: "target".to_string(),
            executor_id: next_id().to_string(),
            executor_name: "moderator".to_string(),
            action_type: "kick".to_string(),
            reason: None,
            case_number: id as i64,
        }
    }

    pub fn action_type(mut self, action_type: impl Into<String>) -> Self {
        self.action_type = action_type.into();
        self
    }

    pub fn reason(mut self, reason: Option<&str>) -> Self {
        self.reason = reason.map(str::to_string);
        self
    }

    pub fn case_number(mut self, case_number: i64) -> Self {
        self.case_number = case_number;
        self
    }

    pub fn target(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.target_id = id.into();
        self.target_name = name.into();
        self
    }

    /// Builds and inserts the audit action into the database.
    pub async fn build(self) -> Result<entity::audit_action::Model, DbErr> {
        let now = Utc::now();
        entity::audit_action::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            target_id: ActiveValue::Set(self.target_id),
            target_name: ActiveValue::Set(self.target_name),
            executor_id: ActiveValue::Set(self.executor_id),
            executor_name: ActiveValue::Set(self.executor_name),
            action_type: ActiveValue::Set(self.action_type),
            reason: ActiveValue::Set(self.reason),
            case_number: ActiveValue::Set(self.case_number),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a kick audit action with default values.
pub async fn create_audit_action(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::audit_action::Model, DbErr> {
    AuditActionFactory::new(db, guild_id).build().await
}
