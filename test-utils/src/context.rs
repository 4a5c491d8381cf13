use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Matches the server's session layer.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// In-memory database, session and tables for a single test.
///
/// Each context owns its own SQLite database, so tests never see each other's cafés, customers
/// or sessions. The session lives in the same database as the entity tables, the way the
/// server shares its pool with the session store.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the database, connecting on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => Ok(&*self.db.insert(connect().await?)),
        }
    }

    /// Executes CREATE TABLE statements in order. Called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets the session, creating the session table and an empty session on first use.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let pool = self.database().await?.get_sqlite_connection_pool().clone();
                let store = SqliteStore::new(pool);
                store.migrate().await?;

                let session = Session::new(
                    None,
                    Arc::new(store),
                    Some(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Gets database and session together, for access guard tests needing both borrows.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(sea_orm::DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}

/// Opens a private in-memory database.
///
/// A single connection keeps every query on the same in-memory database.
async fn connect() -> Result<DatabaseConnection, TestError> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    Ok(Database::connect(opt).await?)
}
