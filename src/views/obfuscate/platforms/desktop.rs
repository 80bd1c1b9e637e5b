// Desktop delivery: write straight into the user's Downloads folder
use std::path::{Path, PathBuf};

use super::common::unique_destination;

fn delivery_dir() -> PathBuf {
    // Fall back to the temp dir when the platform has no Downloads folder
    dirs::download_dir().unwrap_or_else(std::env::temp_dir)
}

/// Write the archive without clobbering previous runs; returns the path it
/// landed at.
pub fn save_archive(data: &[u8], file_name: &str) -> Result<String, String> {
    let dest = unique_destination(&delivery_dir(), file_name);
    std::fs::write(&dest, data)
        .map_err(|e| format!("Failed to save {}: {}", dest.display(), e))?;
    tracing::info!("Archive saved to {}", dest.display());
    Ok(dest.to_string_lossy().to_string())
}

/// Open the folder holding a saved archive in the system file manager.
pub fn reveal_in_folder(path: &str) {
    let target = Path::new(path)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(path));
    if let Err(e) = open::that(target) {
        tracing::warn!("Could not open file manager: {}", e);
    }
}
