use crate::model::{access_list::AccessListKind, audit_action::AuditAction};

/// What a case number refers to.
#[derive(Debug, Clone, PartialEq)]
pub enum CaseRecord {
    /// The latest committed mutation of a guild's access list.
    AccessList { guild_id: u64, kind: AccessListKind },
    /// A recorded moderation action.
    Action(AuditAction),
}

impl CaseRecord {
    pub fn guild_id(&self) -> u64 {
        match self {
            Self::AccessList { guild_id, .. } => *guild_id,
            Self::Action(action) => action.guild_id,
        }
    }
}
