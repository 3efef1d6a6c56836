use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexerConfig {
    /// Traversal roots; empty means the platform default.
    #[serde(default)]
    pub roots: Vec<String>,
    /// Extra filesystems whose mount points may be entered.
    #[serde(default)]
    pub filesystems: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub indexer: IndexerConfig,
    pub logging: LoggingConfig,
}

const DEFAULTS: &str = include_str!("../config/default.toml");

impl Default for AppConfig {
    fn default() -> Self {
        // Fallback: parse the embedded default TOML
        match ::config::Config::builder()
            .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
            .build()
        {
            Ok(cfg) => match cfg.try_deserialize() {
                Ok(app_cfg) => app_cfg,
                Err(e) => {
                    eprintln!("FATAL: Failed to deserialize default config: {}", e);
                    panic!("Failed to deserialize default config: {}", e);
                }
            },
            Err(e) => {
                eprintln!("FATAL: Failed to parse default config: {}", e);
                panic!("Failed to parse default config: {}", e);
            }
        }
    }
}

/// Values given on the command line; they win over every file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub database_url: Option<String>,
    pub roots: Vec<String>,
    pub filesystems: Vec<String>,
}

/// Embedded defaults -> `file-index.toml` in the CWD -> `--config` file -> command line.
pub fn load(overrides: &Overrides) -> anyhow::Result<AppConfig> {
    let mut builder = ::config::Config::builder()
        .add_source(::config::File::from_str(DEFAULTS, ::config::FileFormat::Toml))
        .add_source(::config::File::with_name("file-index").required(false));

    if let Some(path) = &overrides.config_file {
        builder = builder.add_source(
            ::config::File::from(path.as_path()).format(::config::FileFormat::Toml).required(true),
        );
    }
    if let Some(url) = &overrides.database_url {
        builder = builder.set_override("database.url", url.as_str())?;
    }
    if !overrides.roots.is_empty() {
        builder = builder.set_override("indexer.roots", overrides.roots.clone())?;
    }
    if !overrides.filesystems.is_empty() {
        builder = builder.set_override("indexer.filesystems", overrides.filesystems.clone())?;
    }

    let cfg = builder.build()?;
    let app_cfg: AppConfig = cfg.try_deserialize()?;
    validate(&app_cfg)?;
    Ok(app_cfg)
}

pub fn validate(cfg: &AppConfig) -> anyhow::Result<()> {
    if cfg.database.url.trim().is_empty() {
        return Err(anyhow::anyhow!("database.url must not be empty"));
    }
    if cfg.indexer.roots.iter().any(|r| r.trim().is_empty()) {
        return Err(anyhow::anyhow!("indexer.roots must not contain empty paths"));
    }
    if cfg.indexer.filesystems.iter().any(|f| f.trim().is_empty()) {
        return Err(anyhow::anyhow!("indexer.filesystems must not contain empty entries"));
    }
    if cfg.logging.filter.trim().is_empty() {
        return Err(anyhow::anyhow!("logging.filter must not be empty"));
    }
    Ok(())
}

pub fn ensure_sqlite_parent_dir(url: &str) -> anyhow::Result<()> {
    if let Some(path) = url.strip_prefix("sqlite://") {
        // On Windows, handle URLs like sqlite:///C:/... by stripping the leading '/'
        #[cfg(windows)]
        let path = {
            let bytes = path.as_bytes();
            if bytes.len() >= 3 && bytes[0] == b'/' && bytes[2] == b':' && bytes[1].is_ascii_alphabetic() {
                &path[1..]
            } else {
                path
            }
        };
        let p = Path::new(path);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }
    Ok(())
}
