use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{CaseCounter, GuildRecord};
///
/// let test = TestBuilder::new()
///     .with_table(GuildRecord)
///     .with_table(CaseCounter)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys should be added after their referenced
    /// tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table used by access list and audit operations.
    ///
    /// Tables are added in dependency order:
    /// - GuildRecord
    /// - AccessList
    /// - AccessEntry
    /// - AuditAction
    /// - CaseCounter
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_access_tables(self) -> Self {
        let mut builder = self.with_table(GuildRecord).with_table(AccessList);
        // Mirror the migration's unique (guild_id, kind) index on access_list
        if let Some(access_list) = builder.tables.last_mut() {
            access_list.index(
                Index::create()
                    .name("idx_access_list_guild_id_kind")
                    .col(entity::access_list::Column::GuildId)
                    .col(entity::access_list::Column::Kind)
                    .unique(),
            );
        }
        builder
            .with_table(AccessEntry)
            .with_table(AuditAction)
            .with_table(CaseCounter)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
