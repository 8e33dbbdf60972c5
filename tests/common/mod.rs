use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use movieplace::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let database_url = path.to_str().expect("non-utf8 temp path");

        let mut conn =
            SqliteConnection::establish(database_url).expect("failed to create test database");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");

        let pool = establish_connection_pool(database_url).expect("failed to build test pool");

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
