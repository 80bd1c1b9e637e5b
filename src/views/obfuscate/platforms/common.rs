// Shared pieces of the delivery paths

use std::path::{Path, PathBuf};

use chrono::Local;

pub const ARCHIVE_MIME: &str = "application/zip";

// Data-URL rendition of the archive for builds without a browser URL object
#[cfg(not(feature = "web"))]
pub fn create_archive_url(data: &[u8]) -> Option<String> {
    use base64::{engine::general_purpose::STANDARD, Engine};
    Some(format!(
        "data:{};base64,{}",
        ARCHIVE_MIME,
        STANDARD.encode(data)
    ))
}

// Nothing to click through outside the browser
#[cfg(not(feature = "web"))]
pub fn trigger_download(_url: &str, _file_name: &str) {}

/// Destination that never clobbers an existing file: on collision the name
/// gains a local timestamp, then a counter.
pub fn unique_destination(dir: &Path, file_name: &str) -> PathBuf {
    let plain = dir.join(file_name);
    if !plain.exists() {
        return plain;
    }

    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) => (stem, Some(ext)),
        None => (file_name, None),
    };
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    let stamped = match ext {
        Some(ext) => format!("{stem}_{stamp}.{ext}"),
        None => format!("{stem}_{stamp}"),
    };

    let mut candidate = dir.join(&stamped);
    let mut n = 1;
    while candidate.exists() {
        let numbered = match ext {
            Some(ext) => format!("{stem}_{stamp}_{n}.{ext}"),
            None => format!("{stem}_{stamp}_{n}"),
        };
        candidate = dir.join(numbered);
        n += 1;
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_is_plain_when_free() {
        let dir = tempfile::tempdir().unwrap();
        let dest = unique_destination(dir.path(), "obfuscated_scripts.zip");
        assert_eq!(dest, dir.path().join("obfuscated_scripts.zip"));
    }

    #[test]
    fn destination_moves_aside_on_collision() {
        let dir = tempfile::tempdir().unwrap();
        let taken = dir.path().join("obfuscated_scripts.zip");
        std::fs::write(&taken, b"previous run").unwrap();

        let second = unique_destination(dir.path(), "obfuscated_scripts.zip");
        assert_ne!(second, taken);
        let name = second.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("obfuscated_scripts_"));
        assert!(name.ends_with(".zip"));

        // A third run in the same second still lands somewhere fresh
        std::fs::write(&second, b"second run").unwrap();
        let third = unique_destination(dir.path(), "obfuscated_scripts.zip");
        assert_ne!(third, taken);
        assert_ne!(third, second);
    }

    #[cfg(not(feature = "web"))]
    #[test]
    fn archive_url_is_a_zip_data_url() {
        use base64::{engine::general_purpose::STANDARD, Engine};

        let url = create_archive_url(b"PK\x03\x04").unwrap();
        let payload = url
            .strip_prefix("data:application/zip;base64,")
            .expect("data url prefix");
        assert_eq!(STANDARD.decode(payload).unwrap(), b"PK\x03\x04");
    }
}
