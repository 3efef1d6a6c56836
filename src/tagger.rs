use std::fs::Metadata;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local, NaiveDateTime, Utc};

#[cfg(unix)]
use std::os::unix::fs::MetadataExt;

use crate::classify::{folder_depth, size_category};
use crate::formats;
use crate::owner::OwnerResolver;
use crate::types::TagRecord;

/// Builds the tag for the file at `path`.
///
/// Never fails: timestamps the platform cannot report and owners that cannot be
/// resolved are left empty.
pub fn build_tag(metadata: &Metadata, path: &Path, owners: &dyn OwnerResolver) -> TagRecord {
    let format = file_format(path);
    let identifiers = formats::identifiers_for(&format)
        .map(|ids| ids.iter().map(|s| s.to_string()).collect());

    let owner = match owners.owner_name(metadata, path) {
        Ok(name) => Some(name),
        Err(e) => {
            tracing::debug!("No owner for {}: {}", path.display(), e);
            None
        }
    };

    TagRecord {
        size: size_category(metadata.len()),
        format,
        created: created_time(metadata),
        accessed: local_datetime(metadata.accessed()),
        modified: local_datetime(metadata.modified()),
        owner,
        indent: folder_depth(path),
        identifiers,
    }
}

/// Lowercase suffix after the final '.' of the file name.
///
/// Dotfiles like `.bashrc` have no suffix.
pub fn file_format(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

fn local_datetime(time: io::Result<SystemTime>) -> Option<NaiveDateTime> {
    time.ok().map(|t| DateTime::<Local>::from(t).naive_local())
}

// POSIX has no portable birth time; `created` holds st_ctime there.
#[cfg(unix)]
fn created_time(metadata: &Metadata) -> Option<NaiveDateTime> {
    let nanos = u32::try_from(metadata.ctime_nsec()).unwrap_or(0);
    DateTime::<Utc>::from_timestamp(metadata.ctime(), nanos)
        .map(|utc| utc.with_timezone(&Local).naive_local())
}

#[cfg(not(unix))]
fn created_time(metadata: &Metadata) -> Option<NaiveDateTime> {
    local_datetime(metadata.created())
}
