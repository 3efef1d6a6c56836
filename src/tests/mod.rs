//! Tests for the indexer.
//!
//! ## Test Modules
//!
//! - **classify_tests**: size categories and folder depth
//! - **boundary_tests**: mount detection, allow-list and drive tokens
//! - **tagger_tests**: tag derivation and the format table
//! - **db_tests**: schema and the SQLite catalog
//! - **walker_tests**: full walks over temporary trees
//! - **config_tests**: configuration layering and root planning
//!
//! Individual modules can be run with:
//! ```bash
//! cargo test walker_tests
//! ```

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::boundary::FilesystemBoundary;
use crate::db;
use crate::error::OwnerError;
use crate::owner::OwnerResolver;

pub mod boundary_tests;
pub mod classify_tests;

/// Single-connection in-memory catalog with the schema applied.
pub(crate) async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::init_db(&pool).await.unwrap();
    pool
}

/// Boundary with a fixed set of mount points and admitted paths.
#[derive(Default)]
pub(crate) struct FakeBoundary {
    pub mounts: Vec<PathBuf>,
    pub admitted: Vec<PathBuf>,
}

impl FilesystemBoundary for FakeBoundary {
    fn is_mount_point(&self, path: &Path) -> bool {
        self.mounts.iter().any(|m| m == path)
    }

    fn admits(&self, path: &Path) -> bool {
        self.admitted.iter().any(|a| a == path)
    }
}

pub(crate) struct FixedOwner(pub &'static str);

impl OwnerResolver for FixedOwner {
    fn owner_name(&self, _metadata: &Metadata, _path: &Path) -> Result<String, OwnerError> {
        Ok(self.0.to_string())
    }
}

pub(crate) struct FailingOwner;

impl OwnerResolver for FailingOwner {
    fn owner_name(&self, _metadata: &Metadata, _path: &Path) -> Result<String, OwnerError> {
        Err(OwnerError::Lookup("no such user".to_string()))
    }
}
