//! Domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary, where
//! string snowflakes become `u64` and string enums become typed enums. Parameter types
//! carry the inputs of a single service or repository operation.

pub mod access_list;
pub mod audit_action;
pub mod case;
pub mod guild_record;
pub mod outcome;
pub mod payload;
pub mod target;
pub mod view;
