pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_guild_record_table;
mod m20260301_000002_create_access_list_table;
mod m20260301_000003_create_access_entry_table;
mod m20260301_000004_create_audit_action_table;
mod m20260301_000005_create_case_counter_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_guild_record_table::Migration),
            Box::new(m20260301_000002_create_access_list_table::Migration),
            Box::new(m20260301_000003_create_access_entry_table::Migration),
            Box::new(m20260301_000004_create_audit_action_table::Migration),
            Box::new(m20260301_000005_create_case_counter_table::Migration),
        ]
    }
}
