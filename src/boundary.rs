#[cfg(not(windows))]
use std::fs;
use std::path::Path;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

/// Decides whether the walker may cross into another filesystem.
///
/// Only directories for which [`is_mount_point`](FilesystemBoundary::is_mount_point)
/// is true are ever checked against [`admits`](FilesystemBoundary::admits).
pub trait FilesystemBoundary: Send + Sync {
    fn is_mount_point(&self, path: &Path) -> bool;
    fn admits(&self, path: &Path) -> bool;
}

/// Boundary backed by the host's mount table and an allow-list of root prefixes.
#[derive(Debug, Clone, Default)]
pub struct HostBoundary {
    allowed_roots: Vec<String>,
}

impl HostBoundary {
    pub fn new(allowed_roots: Vec<String>) -> Self {
        Self { allowed_roots }
    }

    pub fn allowed_roots(&self) -> &[String] {
        &self.allowed_roots
    }
}

impl FilesystemBoundary for HostBoundary {
    fn is_mount_point(&self, path: &Path) -> bool {
        is_mount_point(path)
    }

    fn admits(&self, path: &Path) -> bool {
        is_within_allowed_filesystems(path, &self.allowed_roots)
    }
}

/// True when the canonical form of `path` starts with one of `allowed_roots`.
///
/// Drive letters already separate filesystems on Windows, so everything is admitted there.
#[cfg(windows)]
pub fn is_within_allowed_filesystems(_path: &Path, _allowed_roots: &[String]) -> bool {
    true
}

/// True when the canonical form of `path` starts with one of `allowed_roots`.
///
/// A path that cannot be canonicalized is rejected.
#[cfg(not(windows))]
pub fn is_within_allowed_filesystems(path: &Path, allowed_roots: &[String]) -> bool {
    match fs::canonicalize(path) {
        Ok(resolved) => {
            let resolved = resolved.to_string_lossy();
            allowed_roots.iter().any(|root| resolved.starts_with(root.as_str()))
        }
        Err(e) => {
            tracing::warn!("Failed to resolve '{}': {}", path.display(), e);
            false
        }
    }
}

/// True when `path` is the root of a filesystem other than its parent's.
///
/// Mirrors the usual `ismount` test: the device id changes across `path/..`, or
/// `path/..` is the same inode as `path` (the filesystem root).
#[cfg(unix)]
pub fn is_mount_point(path: &Path) -> bool {
    let Ok(meta) = fs::symlink_metadata(path) else {
        return false;
    };
    if meta.file_type().is_symlink() {
        return false;
    }
    let Ok(parent) = fs::symlink_metadata(path.join("..")) else {
        return false;
    };
    meta.dev() != parent.dev() || meta.ino() == parent.ino()
}

// Mount boundaries are not consulted on other platforms; see `is_within_allowed_filesystems`.
#[cfg(not(unix))]
pub fn is_mount_point(_path: &Path) -> bool {
    false
}

/// Keeps the tokens that look like drive letters (`D:`, `D:\`), dropping the rest silently.
pub fn drive_tokens(filesystems: &[String]) -> Vec<String> {
    filesystems
        .iter()
        .filter(|fs| fs.chars().count() <= 4 && fs.chars().nth(1) == Some(':'))
        .cloned()
        .collect()
}
