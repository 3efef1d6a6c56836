//! Depth-first walk that records directories, files and tags.
//!
//! A visit inserts its own directory first, then handles each entry in the
//! order the OS lists them: symlinks are skipped, directories are recursed into
//! (unless they are a mount point the boundary rejects), everything else is
//! recorded as a file followed by its tag. Filesystem errors end the affected
//! subtree only; catalog errors end the run.
//!
//! The parent id is threaded through a level: once a subdirectory has been
//! visited, its id becomes the parent of the entries listed after it.

use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use futures::future::BoxFuture;

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

use crate::boundary::FilesystemBoundary;
use crate::catalog::Catalog;
use crate::error::{WalkError, WalkResult};
use crate::owner::OwnerResolver;
use crate::tagger;
use crate::types::WalkSummary;

pub struct Walker<'a> {
    catalog: &'a mut dyn Catalog,
    boundary: &'a dyn FilesystemBoundary,
    owners: &'a dyn OwnerResolver,
    summary: WalkSummary,
}

impl<'a> Walker<'a> {
    pub fn new(
        catalog: &'a mut dyn Catalog,
        boundary: &'a dyn FilesystemBoundary,
        owners: &'a dyn OwnerResolver,
    ) -> Self {
        Self { catalog, boundary, owners, summary: WalkSummary::default() }
    }

    /// Walks the tree below `root`, recording `root` itself without a parent.
    ///
    /// Returns the id of the root directory row, or `None` if the root could not be
    /// statted for lack of permission.
    pub async fn walk_root(&mut self, root: &Path) -> WalkResult<Option<i64>> {
        self.visit(root.to_path_buf(), None).await
    }

    pub fn into_summary(self) -> WalkSummary {
        self.summary
    }

    fn visit(&mut self, dir: PathBuf, parent_id: Option<i64>) -> BoxFuture<'_, WalkResult<Option<i64>>> {
        Box::pin(async move {
            let meta = match fs::symlink_metadata(&dir) {
                Ok(m) => m,
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    tracing::warn!("Permission denied on '{}': {}", dir.display(), e);
                    self.summary.errors += 1;
                    return Ok(parent_id);
                }
                Err(e) => return Err(WalkError::io(&dir, e)),
            };

            let permission = permission_bits(&meta);
            let dir_id = self
                .catalog
                .insert_directory(parent_id, &entry_name(&dir), &dir.to_string_lossy(), Some(permission.as_str()))
                .await?;
            self.summary.directories += 1;

            let entries = match fs::read_dir(&dir) {
                Ok(rd) => rd,
                Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                    tracing::warn!("Permission denied listing '{}': {}", dir.display(), e);
                    self.summary.errors += 1;
                    return Ok(Some(dir_id));
                }
                Err(e) => return Err(WalkError::io(&dir, e)),
            };

            let mut current_id = dir_id;
            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        tracing::warn!("Failed to read an entry of '{}': {}", dir.display(), e);
                        self.summary.errors += 1;
                        continue;
                    }
                };
                let path = entry.path();
                let file_type = match entry.file_type() {
                    Ok(t) => t,
                    Err(e) => {
                        tracing::warn!("Failed to determine type of '{}': {}", path.display(), e);
                        self.summary.errors += 1;
                        continue;
                    }
                };

                if file_type.is_symlink() {
                    self.summary.skipped_symlinks += 1;
                    continue;
                }

                if file_type.is_dir() {
                    if self.boundary.is_mount_point(&path) && !self.boundary.admits(&path) {
                        tracing::info!("Skipping '{}' as it's not on the same filesystem", path.display());
                        self.summary.skipped_mounts += 1;
                        continue;
                    }
                    match self.visit(path.clone(), Some(current_id)).await {
                        Ok(Some(id)) => current_id = id,
                        Ok(None) => {}
                        Err(e) if e.is_recoverable() => {
                            tracing::warn!("Failed to index '{}': {}", path.display(), e);
                            self.summary.errors += 1;
                        }
                        Err(e) => return Err(e),
                    }
                } else {
                    self.record_file(current_id, &path).await?;
                }
            }

            Ok(Some(dir_id))
        })
    }

    async fn record_file(&mut self, dir_id: i64, path: &Path) -> WalkResult<()> {
        let name = entry_name(path);
        let full_path = path.to_string_lossy();

        let meta = match fs::symlink_metadata(path) {
            Ok(m) => m,
            Err(e) => {
                // Keep the row so the listing stays complete; size and tag stay unknown.
                tracing::warn!("Failed to stat '{}': {}", path.display(), e);
                self.catalog.insert_file(dir_id, &name, &full_path, None, None).await?;
                self.summary.files += 1;
                self.summary.errors += 1;
                return Ok(());
            }
        };

        let permission = permission_bits(&meta);
        let file_id = self
            .catalog
            .insert_file(dir_id, &name, &full_path, Some(meta.len()), Some(permission.as_str()))
            .await?;
        self.summary.files += 1;

        let tag = tagger::build_tag(&meta, path, self.owners);
        self.catalog.insert_tag(file_id, &tag).await?;
        self.summary.tags += 1;
        Ok(())
    }
}

/// Walks every root in order against the same catalog.
///
/// A root that cannot be indexed is logged and skipped; a catalog error aborts.
pub async fn index_roots(
    catalog: &mut dyn Catalog,
    boundary: &dyn FilesystemBoundary,
    owners: &dyn OwnerResolver,
    roots: &[PathBuf],
) -> WalkResult<WalkSummary> {
    let mut total = WalkSummary::default();
    for root in roots {
        tracing::info!("Indexing '{}'", root.display());
        let mut walker = Walker::new(&mut *catalog, boundary, owners);
        match walker.walk_root(root).await {
            Ok(_) => {}
            Err(e) if e.is_recoverable() => {
                tracing::warn!("Failed to index '{}': {}", root.display(), e);
                walker.summary.errors += 1;
            }
            Err(e) => return Err(e),
        }
        let summary = walker.into_summary();
        tracing::info!(
            root = %root.display(),
            directories = summary.directories,
            files = summary.files,
            skipped_mounts = summary.skipped_mounts,
            errors = summary.errors,
            "Finished root"
        );
        total.merge(&summary);
    }
    Ok(total)
}

/// Last path component; empty for filesystem roots such as `/` or `C:\`.
fn entry_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Mode bits as octal text, e.g. `40755` for a directory.
#[cfg(unix)]
pub fn permission_bits(meta: &Metadata) -> String {
    format!("{:o}", meta.mode())
}

/// Mode bits synthesized from the read-only attribute, in the POSIX layout.
#[cfg(not(unix))]
pub fn permission_bits(meta: &Metadata) -> String {
    let mut mode: u32 = if meta.permissions().readonly() { 0o444 } else { 0o666 };
    if meta.is_dir() {
        mode |= 0o040_111;
    } else {
        mode |= 0o100_000;
    }
    format!("{:o}", mode)
}
