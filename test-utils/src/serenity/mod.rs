//! Test fixtures for creating Serenity API objects.
//!
//! These fixtures build valid Serenity structs by deserializing JSON shaped like the
//! payloads Discord sends, so classifier, hierarchy and snapshot code can be tested
//! against real types without a gateway connection.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_guild, create_test_member, create_test_role};
//!
//! let mut guild = create_test_guild(1, "Test Guild", 10);
//! let mod_role = create_test_role(20, "Moderator", 5);
//! guild.roles.insert(mod_role.id, mod_role);
//!
//! let member = create_test_member(1, 30, "alice", &[20], false);
//! guild.members.insert(member.user.id, member);
//! ```
//!
//! # Available Fixtures
//!
//! - `guild::create_test_guild` - Guild with empty member, role and channel maps
//! - `role::create_test_role` - Role at a given hierarchy position
//! - `member::create_test_member` - Member holding a set of roles
//! - `channel::create_test_channel` - Text channel

pub mod channel;
pub mod guild;
pub mod member;
pub mod role;

pub use channel::create_test_channel;
pub use guild::create_test_guild;
pub use member::create_test_member;
pub use role::create_test_role;
