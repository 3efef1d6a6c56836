//! Static table of format identifiers (magic signatures) keyed by lowercase extension.
//!
//! Each identifier is the leading byte signature of the format, written as
//! space-separated hex. Offsets other than zero are noted after an `@`.

use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref FORMAT_IDENTIFIERS: HashMap<&'static str, &'static [&'static str]> = {
        let entries: &[(&'static str, &'static [&'static str])] = &[
            // images
            ("png", &["89 50 4E 47 0D 0A 1A 0A"]),
            ("jpg", &["FF D8 FF"]),
            ("jpeg", &["FF D8 FF"]),
            ("gif", &["47 49 46 38 37 61", "47 49 46 38 39 61"]),
            ("bmp", &["42 4D"]),
            ("tif", &["49 49 2A 00", "4D 4D 00 2A"]),
            ("tiff", &["49 49 2A 00", "4D 4D 00 2A"]),
            ("ico", &["00 00 01 00"]),
            ("webp", &["52 49 46 46", "57 45 42 50 @8"]),
            ("psd", &["38 42 50 53"]),
            // documents
            ("pdf", &["25 50 44 46 2D"]),
            ("ps", &["25 21 50 53"]),
            ("rtf", &["7B 5C 72 74 66 31"]),
            ("doc", &["D0 CF 11 E0 A1 B1 1A E1"]),
            ("xls", &["D0 CF 11 E0 A1 B1 1A E1"]),
            ("ppt", &["D0 CF 11 E0 A1 B1 1A E1"]),
            ("msi", &["D0 CF 11 E0 A1 B1 1A E1"]),
            ("docx", &["50 4B 03 04"]),
            ("xlsx", &["50 4B 03 04"]),
            ("pptx", &["50 4B 03 04"]),
            ("odt", &["50 4B 03 04"]),
            ("epub", &["50 4B 03 04"]),
            // archives
            ("zip", &["50 4B 03 04", "50 4B 05 06", "50 4B 07 08"]),
            ("jar", &["50 4B 03 04"]),
            ("apk", &["50 4B 03 04"]),
            ("gz", &["1F 8B"]),
            ("tgz", &["1F 8B"]),
            ("bz2", &["42 5A 68"]),
            ("xz", &["FD 37 7A 58 5A 00"]),
            ("zst", &["28 B5 2F FD"]),
            ("7z", &["37 7A BC AF 27 1C"]),
            ("rar", &["52 61 72 21 1A 07 00", "52 61 72 21 1A 07 01 00"]),
            ("tar", &["75 73 74 61 72 @257"]),
            ("iso", &["43 44 30 30 31 @32769"]),
            ("cab", &["4D 53 43 46"]),
            ("deb", &["21 3C 61 72 63 68 3E"]),
            ("rpm", &["ED AB EE DB"]),
            // audio / video
            ("mp3", &["49 44 33", "FF FB", "FF F3", "FF F2"]),
            ("flac", &["66 4C 61 43"]),
            ("ogg", &["4F 67 67 53"]),
            ("wav", &["52 49 46 46", "57 41 56 45 @8"]),
            ("avi", &["52 49 46 46", "41 56 49 20 @8"]),
            ("mid", &["4D 54 68 64"]),
            ("mkv", &["1A 45 DF A3"]),
            ("webm", &["1A 45 DF A3"]),
            ("mp4", &["66 74 79 70 @4"]),
            ("mov", &["66 74 79 70 71 74 @4"]),
            ("flv", &["46 4C 56"]),
            // executables and objects
            ("exe", &["4D 5A"]),
            ("dll", &["4D 5A"]),
            ("so", &["7F 45 4C 46"]),
            ("o", &["7F 45 4C 46"]),
            ("elf", &["7F 45 4C 46"]),
            ("class", &["CA FE BA BE"]),
            ("wasm", &["00 61 73 6D"]),
            ("dex", &["64 65 78 0A"]),
            // data
            ("sqlite", &["53 51 4C 69 74 65 20 66 6F 72 6D 61 74 20 33 00"]),
            ("db", &["53 51 4C 69 74 65 20 66 6F 72 6D 61 74 20 33 00"]),
            ("parquet", &["50 41 52 31"]),
            ("woff", &["77 4F 46 46"]),
            ("woff2", &["77 4F 46 32"]),
            ("ttf", &["00 01 00 00"]),
            ("otf", &["4F 54 54 4F"]),
            ("xml", &["3C 3F 78 6D 6C 20"]),
        ];
        entries.iter().copied().collect()
    };
}

/// Identifiers registered for `extension`, which must already be lowercase.
pub fn identifiers_for(extension: &str) -> Option<&'static [&'static str]> {
    FORMAT_IDENTIFIERS.get(extension).copied()
}
