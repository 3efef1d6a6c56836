use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::classify::SizeCategory;

/// Derived metadata for one file, stored one-to-one in `tags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagRecord {
    pub size: SizeCategory,
    /// Lowercase extension without the dot; empty when the name has none.
    pub format: String,
    pub created: Option<NaiveDateTime>,
    pub accessed: Option<NaiveDateTime>,
    pub modified: Option<NaiveDateTime>,
    pub owner: Option<String>,
    pub indent: u32,
    pub identifiers: Option<Vec<String>>,
}

/// Counters collected while walking one or more roots.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct WalkSummary {
    pub directories: u64,
    pub files: u64,
    pub tags: u64,
    pub skipped_symlinks: u64,
    pub skipped_mounts: u64,
    pub errors: u64,
}

impl WalkSummary {
    pub fn merge(&mut self, other: &WalkSummary) {
        self.directories = self.directories.saturating_add(other.directories);
        self.files = self.files.saturating_add(other.files);
        self.tags = self.tags.saturating_add(other.tags);
        self.skipped_symlinks = self.skipped_symlinks.saturating_add(other.skipped_symlinks);
        self.skipped_mounts = self.skipped_mounts.saturating_add(other.skipped_mounts);
        self.errors = self.errors.saturating_add(other.errors);
    }
}
