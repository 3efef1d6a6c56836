use std::path::PathBuf;

use crate::boundary::drive_tokens;
use crate::config::IndexerConfig;

/// What to walk and which filesystems the walk may cross into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootPlan {
    pub roots: Vec<PathBuf>,
    pub allowed_filesystems: Vec<String>,
}

/// Builds the plan for this platform from the configured roots and filesystems.
pub fn plan(indexer: &IndexerConfig) -> RootPlan {
    if cfg!(windows) {
        plan_drive_letters(&indexer.roots, &indexer.filesystems)
    } else {
        plan_single_root(&indexer.roots, &indexer.filesystems)
    }
}

/// Single-root hosts walk `/`; the filesystems only widen the mount allow-list.
pub fn plan_single_root(roots: &[String], filesystems: &[String]) -> RootPlan {
    let roots = if roots.is_empty() {
        vec![PathBuf::from("/")]
    } else {
        roots.iter().map(PathBuf::from).collect()
    };
    RootPlan { roots, allowed_filesystems: filesystems.to_vec() }
}

/// Drive-letter hosts walk `C:\` plus every well-formed drive token.
pub fn plan_drive_letters(roots: &[String], filesystems: &[String]) -> RootPlan {
    let drives = drive_tokens(filesystems);
    let mut planned: Vec<PathBuf> = if roots.is_empty() {
        vec![PathBuf::from("C:\\")]
    } else {
        roots.iter().map(PathBuf::from).collect()
    };
    for drive in &drives {
        let root = if drive.ends_with('\\') { drive.clone() } else { format!("{}\\", drive) };
        let root = PathBuf::from(root);
        if !planned.contains(&root) {
            planned.push(root);
        }
    }
    RootPlan { roots: planned, allowed_filesystems: drives }
}
