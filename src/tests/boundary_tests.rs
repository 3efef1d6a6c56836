#[cfg(test)]
mod tests {
    use crate::boundary::{drive_tokens, is_mount_point, is_within_allowed_filesystems, FilesystemBoundary, HostBoundary};
    use std::fs;
    use tempfile::TempDir;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[cfg(not(windows))]
    #[test]
    fn test_allowed_when_canonical_path_has_prefix() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("mnt");
        fs::create_dir(&sub).unwrap();
        let canonical_base = fs::canonicalize(temp_dir.path()).unwrap();

        let allowed = vec![canonical_base.to_string_lossy().to_string()];
        assert!(is_within_allowed_filesystems(&sub, &allowed));
        assert!(!is_within_allowed_filesystems(&sub, &strings(&["/definitely/not/here"])));
        assert!(!is_within_allowed_filesystems(&sub, &[]));
    }

    #[cfg(not(windows))]
    #[test]
    fn test_unresolvable_path_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("gone");
        assert!(!is_within_allowed_filesystems(&missing, &strings(&["/"])));
    }

    #[cfg(windows)]
    #[test]
    fn test_everything_allowed_on_windows() {
        let temp_dir = TempDir::new().unwrap();
        assert!(is_within_allowed_filesystems(temp_dir.path(), &[]));
        assert!(is_within_allowed_filesystems(&temp_dir.path().join("gone"), &[]));
    }

    #[cfg(unix)]
    #[test]
    fn test_filesystem_root_is_a_mount_point() {
        assert!(is_mount_point(std::path::Path::new("/")));
    }

    #[test]
    fn test_plain_subdirectory_is_not_a_mount_point() {
        let temp_dir = TempDir::new().unwrap();
        let sub = temp_dir.path().join("plain");
        fs::create_dir(&sub).unwrap();
        assert!(!is_mount_point(&sub));
        assert!(!is_mount_point(&temp_dir.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_never_a_mount_point() {
        let temp_dir = TempDir::new().unwrap();
        let link = temp_dir.path().join("to_root");
        std::os::unix::fs::symlink("/", &link).unwrap();
        assert!(!is_mount_point(&link));
    }

    #[test]
    fn test_host_boundary_keeps_allow_list() {
        let boundary = HostBoundary::new(strings(&["/mnt/c", "/mnt/e"]));
        assert_eq!(boundary.allowed_roots(), &strings(&["/mnt/c", "/mnt/e"])[..]);
        let temp_dir = TempDir::new().unwrap();
        assert!(!boundary.is_mount_point(temp_dir.path()));
    }

    #[test]
    fn test_drive_tokens_filter() {
        let input = strings(&["D:", "E:\\", "F:/", "/mnt/c", "GG:", "network", "Z:\\\\x", ""]);
        assert_eq!(drive_tokens(&input), strings(&["D:", "E:\\", "F:/"]));
    }
}
