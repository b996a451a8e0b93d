//! Helpers for integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use pushkind_shop::db::{DbPool, establish_connection_pool, run_migrations};

/// Temporary database used in integration tests.
///
/// The backing directory, including SQLite's `-wal`/`-shm` side files, is
/// removed when the value is dropped.
pub struct TestDb {
    _dir: TempDir,
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb {
            _dir: dir,
            path,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
