#![allow(dead_code)]

use banner_board::db::{DbPool, establish_connection_pool, run_migrations};
use banner_board::models::config::{MIN_SECRET_LEN, ServerConfig};
use tempfile::TempDir;

/// SQLite database in a temporary directory, migrated and removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(&path.to_string_lossy()).expect("should open pool");
        run_migrations(&pool).expect("should run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn server_config(per_page: usize) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        database_url: ":memory:".to_string(),
        templates_dir: "templates/**/*".to_string(),
        secret: "t".repeat(MIN_SECRET_LEN),
        per_page,
        token_ttl_hours: 24,
        cookie_secure: false,
    }
}
