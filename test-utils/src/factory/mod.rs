//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Guild record with both of its (empty) access lists
//!     let guild = factory::guild_record::create_guild_record(&db).await?;
//!
//!     // Guild-wide allow list entry for an account
//!     let entry = factory::access_entry::AccessEntryFactory::new(&db, &guild.guild_id)
//!         .list_kind("allow")
//!         .target_kind("account")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_record` - Create guild records together with their allow and deny lists
//! - `access_entry` - Create remembered targets on either list
//! - `audit_action` - Create audit actions
//! - `case_counter` - Seed the shared case counter
//! - `helpers` - ID generation

pub mod access_entry;
pub mod audit_action;
pub mod case_counter;
pub mod guild_record;
pub mod helpers;

pub use access_entry::create_access_entry;
pub use audit_action::create_audit_action;
pub use case_counter::seed_case_counter;
pub use guild_record::create_guild_record;
