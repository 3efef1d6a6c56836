//! Persistence gateway for the catalog tables.
//!
//! Every insert is an `INSERT OR IGNORE`; when the row already exists its id is
//! looked up by the uniqueness key instead, so callers always get the id of the
//! logical entry, whether it was created now or by an earlier run.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::error::CatalogError;
use crate::types::TagRecord;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

#[async_trait]
pub trait Catalog: Send {
    /// Records a directory; `parent_id` is `None` only for traversal roots.
    async fn insert_directory(
        &mut self,
        parent_id: Option<i64>,
        name: &str,
        full_path: &str,
        permission: Option<&str>,
    ) -> Result<i64, CatalogError>;

    async fn insert_file(
        &mut self,
        directory_id: i64,
        name: &str,
        file_path: &str,
        size: Option<u64>,
        permission: Option<&str>,
    ) -> Result<i64, CatalogError>;

    /// Records the tag of `file_id`. The returned id is the file id.
    async fn insert_tag(&mut self, file_id: i64, tag: &TagRecord) -> Result<i64, CatalogError>;
}

/// [`Catalog`] on a single SQLite transaction, committed once per run.
pub struct SqliteCatalog {
    tx: Transaction<'static, Sqlite>,
}

impl SqliteCatalog {
    pub async fn begin(pool: &SqlitePool) -> Result<Self, CatalogError> {
        Ok(Self { tx: pool.begin().await? })
    }

    pub async fn commit(self) -> Result<(), CatalogError> {
        self.tx.commit().await?;
        Ok(())
    }

    pub async fn rollback(self) -> Result<(), CatalogError> {
        self.tx.rollback().await?;
        Ok(())
    }
}

#[async_trait]
impl Catalog for SqliteCatalog {
    async fn insert_directory(
        &mut self,
        parent_id: Option<i64>,
        name: &str,
        full_path: &str,
        permission: Option<&str>,
    ) -> Result<i64, CatalogError> {
        let res = sqlx::query(
            "INSERT OR IGNORE INTO directories (parent_id, directory_name, full_path, permission) VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(parent_id)
        .bind(name)
        .bind(full_path)
        .bind(permission)
        .execute(&mut *self.tx)
        .await?;
        if res.rows_affected() == 1 {
            return Ok(res.last_insert_rowid());
        }

        let id: i64 = sqlx::query_scalar("SELECT id FROM directories WHERE full_path = ?1")
            .bind(full_path)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(id)
    }

    async fn insert_file(
        &mut self,
        directory_id: i64,
        name: &str,
        file_path: &str,
        size: Option<u64>,
        permission: Option<&str>,
    ) -> Result<i64, CatalogError> {
        // SQLite integers are signed; sizes beyond i64::MAX do not occur in practice
        let size = size.map(|s| i64::try_from(s).unwrap_or(i64::MAX));
        let res = sqlx::query(
            "INSERT OR IGNORE INTO files (directory_id, file_name, file_path, size, permission) VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(directory_id)
        .bind(name)
        .bind(file_path)
        .bind(size)
        .bind(permission)
        .execute(&mut *self.tx)
        .await?;
        if res.rows_affected() == 1 {
            return Ok(res.last_insert_rowid());
        }

        let id: i64 = sqlx::query_scalar("SELECT id FROM files WHERE file_path = ?1")
            .bind(file_path)
            .fetch_one(&mut *self.tx)
            .await?;
        Ok(id)
    }

    async fn insert_tag(&mut self, file_id: i64, tag: &TagRecord) -> Result<i64, CatalogError> {
        let identifiers = tag.identifiers.as_ref().map(serde_json::to_string).transpose()?;
        sqlx::query(
            r#"INSERT OR IGNORE INTO tags
                (file_id, identifiers, size, format, created, accessed, modified, owner, indent)
               VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"#,
        )
        .bind(file_id)
        .bind(identifiers)
        .bind(tag.size.as_str())
        .bind(tag.format.as_str())
        .bind(format_datetime(tag.created))
        .bind(format_datetime(tag.accessed))
        .bind(format_datetime(tag.modified))
        .bind(tag.owner.as_deref())
        .bind(i64::from(tag.indent))
        .execute(&mut *self.tx)
        .await?;
        Ok(file_id)
    }
}

fn format_datetime(value: Option<NaiveDateTime>) -> Option<String> {
    value.map(|dt| dt.format(DATETIME_FORMAT).to_string())
}
