//! SeaORM entity models for the gatekeeper database.

pub mod prelude;

pub mod access_entry;
pub mod access_list;
pub mod audit_action;
pub mod case_counter;
pub mod guild_record;
