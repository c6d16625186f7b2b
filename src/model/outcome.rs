//! Results of access list mutations, consumed by the presenter.

use crate::model::{
    access_list::{AccessAction, AccessListKind},
    payload::MovePayload,
    target::{Target, TargetKind},
};

/// Everything needed to render an outcome without querying again.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeContext {
    pub guild_id: u64,
    pub target: Target,
    pub kind: TargetKind,
    /// The list the request was made against.
    pub list: AccessListKind,
    pub command_name: Option<String>,
}

impl OutcomeContext {
    pub fn mention(&self) -> String {
        self.kind.mention(self.target.id)
    }
}

/// Result of a single guarded add or remove.
#[derive(Debug, Clone, PartialEq)]
pub enum ModifyOutcome {
    /// Add rejected: the target is already on the list in this scope.
    AlreadyPresent(OutcomeContext),
    /// Remove rejected: the target is not on the list in this scope.
    NotPresent(OutcomeContext),
    /// Add deferred: the target is on the opposite list, a move must be confirmed.
    ConflictPrompt {
        context: OutcomeContext,
        payload: MovePayload,
    },
    /// The mutation was committed under `case_number`.
    Committed {
        context: OutcomeContext,
        action: AccessAction,
        case_number: i64,
    },
}

impl ModifyOutcome {
    pub fn context(&self) -> &OutcomeContext {
        match self {
            Self::AlreadyPresent(context) | Self::NotPresent(context) => context,
            Self::ConflictPrompt { context, .. } | Self::Committed { context, .. } => context,
        }
    }

    /// Case number allocated by this call, if it committed.
    pub fn case_number(&self) -> Option<i64> {
        match self {
            Self::Committed { case_number, .. } => Some(*case_number),
            _ => None,
        }
    }
}

/// Result of a confirmed move.
///
/// Each phase only commits when the live state still calls for it, so either case
/// number may be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveOutcome {
    pub context: OutcomeContext,
    /// Case number of the removal from the opposite list.
    pub removed_case: Option<i64>,
    /// Case number of the addition to the requested list.
    pub added_case: Option<i64>,
}
