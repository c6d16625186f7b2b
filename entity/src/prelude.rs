pub use super::access_entry::Entity as AccessEntry;
pub use super::access_list::Entity as AccessList;
pub use super::audit_action::Entity as AuditAction;
pub use super::case_counter::Entity as CaseCounter;
pub use super::guild_record::Entity as GuildRecord;
