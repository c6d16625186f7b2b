//! Database repository layer.
//!
//! Repositories hold a reference to a SeaORM connection and return `DbErr` directly.
//! They convert entity models into domain models at this boundary. Every access list
//! mutation and audit action runs in its own transaction that also allocates the case
//! number, so a failed write never leaves a consumed case number behind.

pub mod access_list;
pub mod audit_action;
pub mod case_counter;
pub mod guild_record;

#[cfg(test)]
mod test;
