//! Service layer for business logic and orchestration.
//!
//! Services sit between the bot's interaction handlers and the repositories:
//!
//! - **Classification**: placing a target ID into accounts, roles or channels
//! - **Privilege checks**: rejecting targets the invoking moderator may not select
//! - **Orchestration**: guarded add/remove, cross-list conflicts and confirmed moves
//! - **Presentation**: turning outcomes and listings into Discord messages
//!
//! Services return `AppError`; repository `DbErr`s propagate through `?`.

pub mod access_list;
pub mod audit_action;
pub mod case;
pub mod classifier;
pub mod guild_record;
pub mod hierarchy;

#[cfg(test)]
mod test;
