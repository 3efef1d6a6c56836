use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use sqlx::{migrate::MigrateDatabase, sqlite::SqlitePoolOptions, Sqlite};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use file_index::boundary::HostBoundary;
use file_index::catalog::SqliteCatalog;
use file_index::{config, db, owner, roots, walker};

#[derive(Parser, Debug)]
#[command(name = "file-index")]
#[command(about = "Create or update the directory structure catalog")]
#[command(after_help = "Example usage on Linux / Mac:\n    file-index -f /mnt/c /mnt/e\n\nExample usage on Windows:\n    file-index -f D: E:")]
struct Args {
    /// Other file systems to scan
    #[arg(short = 'f', long = "filesystems", num_args = 1..)]
    filesystems: Vec<String>,

    /// Walk these roots instead of the platform default
    #[arg(long = "root")]
    roots: Vec<String>,

    /// SQLite URL of the catalog
    #[arg(long)]
    database: Option<String>,

    /// Additional configuration file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let app_cfg = config::load(&config::Overrides {
        config_file: args.config,
        database_url: args.database,
        roots: args.roots,
        filesystems: args.filesystems,
    })?;

    // Logging (stdout + optional daily rotation)
    let (stdout_nb, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| app_cfg.logging.filter.clone().into());
    let (file_layer, file_guard) = match &app_cfg.logging.directory {
        Some(dir) => {
            std::fs::create_dir_all(dir).ok();
            let file_appender = tracing_appender::rolling::daily(dir, "file-index.log");
            let (file_nb, guard) = tracing_appender::non_blocking(file_appender);
            (Some(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_nb)), Some(guard))
        }
        None => (None, None),
    };
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stdout_nb))
        .with(file_layer)
        .init();
    // Guards am Leben halten, damit Non-Blocking Writer korrekt flushen
    let _log_guards = (stdout_guard, file_guard);

    let db_url = &app_cfg.database.url;
    config::ensure_sqlite_parent_dir(db_url)?;
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        info!("Creating SQLite database at {}", db_url);
        Sqlite::create_database(db_url).await?;
    }
    // One connection for the whole run
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .after_connect(|conn, _meta| {
            Box::pin(async move {
                sqlx::query("PRAGMA foreign_keys=ON;").execute(&mut *conn).await?;
                Ok(())
            })
        })
        .connect(db_url)
        .await
        .with_context(|| format!("failed to open {}", db_url))?;
    db::init_db(&pool).await?;

    let plan = roots::plan(&app_cfg.indexer);
    let boundary = HostBoundary::new(plan.allowed_filesystems);
    if !boundary.allowed_roots().is_empty() {
        info!("Mount points under {:?} will be entered", boundary.allowed_roots());
    }
    let owners = owner::platform_resolver();

    let started = Instant::now();
    let mut catalog = SqliteCatalog::begin(&pool).await?;
    let summary = walker::index_roots(&mut catalog, &boundary, owners.as_ref(), &plan.roots)
        .await
        .context("indexing aborted")?;
    catalog.commit().await?;
    pool.close().await;

    info!(
        directories = summary.directories,
        files = summary.files,
        tags = summary.tags,
        skipped_symlinks = summary.skipped_symlinks,
        skipped_mounts = summary.skipped_mounts,
        errors = summary.errors,
        "Database file '{}' updated successfully in {:.2} seconds!",
        db_url,
        started.elapsed().as_secs_f64()
    );

    Ok(())
}
