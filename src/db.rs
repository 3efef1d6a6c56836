use sqlx::SqlitePool;

/// Creates the catalog schema if it does not exist yet.
///
/// `full_path` and `file_path` are unique so that re-indexing an unchanged tree
/// leaves the catalog as it was.
pub async fn init_db(pool: &SqlitePool) -> anyhow::Result<()> {
    // Pragmas for better durability/performance
    if let Err(e) = sqlx::query("PRAGMA journal_mode=WAL;").execute(pool).await {
        tracing::warn!("Failed to set WAL journal mode: {}", e);
    }
    if let Err(e) = sqlx::query("PRAGMA synchronous=NORMAL;").execute(pool).await {
        tracing::warn!("Failed to set synchronous mode: {}", e);
    }
    // Foreign keys are critical - fail if this doesn't work
    sqlx::query("PRAGMA foreign_keys=ON;").execute(pool).await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS directories (
            id INTEGER PRIMARY KEY,
            parent_id INTEGER REFERENCES directories(id),
            directory_name TEXT NOT NULL,
            full_path TEXT NOT NULL UNIQUE,
            permission TEXT
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS files (
            id INTEGER PRIMARY KEY,
            directory_id INTEGER REFERENCES directories(id),
            file_name TEXT NOT NULL,
            file_path TEXT NOT NULL UNIQUE,
            size INTEGER,
            permission TEXT
        )"#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS tags (
            file_id INTEGER PRIMARY KEY REFERENCES files(id),
            identifiers TEXT,
            size TEXT,
            format TEXT,
            created DATETIME,
            accessed DATETIME,
            modified DATETIME,
            owner TEXT,
            indent INTEGER
        )"#,
    )
    .execute(pool)
    .await?;

    let indexes = [
        ("idx_directories_parent", "CREATE INDEX IF NOT EXISTS idx_directories_parent ON directories(parent_id)"),
        ("idx_files_directory", "CREATE INDEX IF NOT EXISTS idx_files_directory ON files(directory_id)"),
        ("idx_tags_format", "CREATE INDEX IF NOT EXISTS idx_tags_format ON tags(format)"),
    ];
    for (name, query) in indexes {
        if let Err(e) = sqlx::query(query).execute(pool).await {
            tracing::warn!("Failed to create index {}: {}", name, e);
        }
    }

    Ok(())
}
