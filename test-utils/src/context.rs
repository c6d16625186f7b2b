use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database,
    DatabaseConnection,
};

use crate::error::TestError;

/// Test context holding the in-memory database of a single test.
///
/// Every test gets its own database, so tests never observe each other's guild
/// records, list entries or case numbers.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance, created on first use.
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    pub fn new() -> Self {
        Self { db: None }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// The pool is capped at one connection: every SQLite `:memory:` connection opens a
    /// separate empty database, so a second pooled connection would not see the tables.
    /// Code under test must therefore run its queries on the open transaction while one
    /// is in progress.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the in-memory database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let mut opt = ConnectOptions::new("sqlite::memory:");
            opt.max_connections(1).min_connections(1).sqlx_logging(false);

            self.db = Some(Database::connect(opt).await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Database(sea_orm::DbErr::Custom("No connection".into())))
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Called by `TestBuilder::build()`; statements run in the order given, so tables
    /// must follow their foreign key dependencies.
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
