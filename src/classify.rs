use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * KIB;
const GIB: u64 = 1024 * MIB;

/// Coarse size bucket stored in `tags.size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeCategory {
    Empty,
    Tiny,
    Small,
    Medium,
    Large,
    Huge,
    Gigantic,
}

impl SizeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeCategory::Empty => "Empty",
            SizeCategory::Tiny => "Tiny",
            SizeCategory::Small => "Small",
            SizeCategory::Medium => "Medium",
            SizeCategory::Large => "Large",
            SizeCategory::Huge => "Huge",
            SizeCategory::Gigantic => "Gigantic",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Buckets a byte size. Upper bounds are inclusive.
pub fn size_category(bytes: u64) -> SizeCategory {
    match bytes {
        0 => SizeCategory::Empty,
        b if b <= 16 * KIB => SizeCategory::Tiny,
        b if b <= MIB => SizeCategory::Small,
        b if b <= 128 * MIB => SizeCategory::Medium,
        b if b <= GIB => SizeCategory::Large,
        b if b <= 4 * GIB => SizeCategory::Huge,
        _ => SizeCategory::Gigantic,
    }
}

/// Number of parent steps between `path` and the filesystem root.
///
/// `/` is 0, `/a` is 1, `/a/b` is 2. Relative paths count up to the empty path.
pub fn folder_depth(path: &Path) -> u32 {
    let mut depth = 0;
    let mut current = path;
    while let Some(parent) = current.parent() {
        if parent == current {
            break;
        }
        depth += 1;
        current = parent;
    }
    depth
}
