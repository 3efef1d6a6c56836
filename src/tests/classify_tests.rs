#[cfg(test)]
mod tests {
    use crate::classify::{folder_depth, size_category, SizeCategory};
    use std::path::Path;

    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    const GIB: u64 = 1024 * MIB;

    #[test]
    fn test_size_category_boundaries() {
        let cases = [
            (0, SizeCategory::Empty),
            (1, SizeCategory::Tiny),
            (16 * KIB, SizeCategory::Tiny),
            (16 * KIB + 1, SizeCategory::Small),
            (MIB, SizeCategory::Small),
            (MIB + 1, SizeCategory::Medium),
            (128 * MIB, SizeCategory::Medium),
            (128 * MIB + 1, SizeCategory::Large),
            (GIB, SizeCategory::Large),
            (GIB + 1, SizeCategory::Huge),
            (4 * GIB, SizeCategory::Huge),
            (4 * GIB + 1, SizeCategory::Gigantic),
            (u64::MAX, SizeCategory::Gigantic),
        ];
        for (bytes, expected) in cases {
            assert_eq!(size_category(bytes), expected, "size {}", bytes);
        }
    }

    #[test]
    fn test_size_category_is_monotonic() {
        let mut previous = size_category(0);
        let mut bytes = 1u64;
        while bytes < 8 * GIB {
            let current = size_category(bytes);
            assert!(current >= previous, "{} went from {} to {}", bytes, previous, current);
            previous = current;
            bytes = bytes * 3 / 2 + 1;
        }
    }

    #[test]
    fn test_size_category_labels() {
        assert_eq!(SizeCategory::Empty.to_string(), "Empty");
        assert_eq!(SizeCategory::Medium.as_str(), "Medium");
        assert_eq!(SizeCategory::Gigantic.to_string(), "Gigantic");
    }

    #[cfg(unix)]
    #[test]
    fn test_folder_depth_unix() {
        assert_eq!(folder_depth(Path::new("/")), 0);
        assert_eq!(folder_depth(Path::new("/a")), 1);
        assert_eq!(folder_depth(Path::new("/a/b")), 2);
        assert_eq!(folder_depth(Path::new("/a/b/c.txt")), 3);
    }

    #[cfg(windows)]
    #[test]
    fn test_folder_depth_windows() {
        assert_eq!(folder_depth(Path::new("C:\\")), 0);
        assert_eq!(folder_depth(Path::new("C:\\a")), 1);
        assert_eq!(folder_depth(Path::new("C:\\a\\b")), 2);
    }

    #[test]
    fn test_folder_depth_is_additive() {
        let base = std::env::temp_dir();
        let depth = folder_depth(&base);
        assert_eq!(folder_depth(&base.join("a")), depth + 1);
        assert_eq!(folder_depth(&base.join("a").join("b")), depth + 2);
    }

    #[test]
    fn test_folder_depth_relative() {
        assert_eq!(folder_depth(Path::new("a")), 1);
        assert_eq!(folder_depth(Path::new("a/b")), 2);
    }
}
