/// Photo persistence
///
/// Writes the processed image to the user's Pictures folder as a
/// timestamped PNG. The save runs as a fire-and-forget task; completion
/// comes back as a single result message and is only logged.

use chrono::Local;
use image::RgbaImage;
use std::path::PathBuf;
use thiserror::Error;
use tokio::task;

#[derive(Debug, Clone, Error)]
pub enum SaveError {
    #[error("could not determine a pictures directory")]
    NoPicturesDir,
    #[error("could not create {path}: {reason}")]
    CreateDir { path: PathBuf, reason: String },
    #[error("could not write {path}: {reason}")]
    Write { path: PathBuf, reason: String },
    #[error("save task failed: {0}")]
    TaskJoin(String),
}

/// Directory saves land in:
/// - Linux: ~/Pictures/snapfilter
/// - macOS: ~/Pictures/snapfilter
/// - Windows: %USERPROFILE%\Pictures\snapfilter
fn output_dir() -> Result<PathBuf, SaveError> {
    let mut path = dirs::picture_dir()
        .or_else(dirs::home_dir)
        .ok_or(SaveError::NoPicturesDir)?;
    path.push("snapfilter");
    Ok(path)
}

/// File name for a save happening now, e.g. "filtered_20240813_142250.png".
fn output_filename() -> String {
    format!("filtered_{}.png", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Persist a processed image to the Pictures folder.
///
/// Returns the path it was written to. Runs the encode on a blocking task.
pub async fn save_to_pictures(image: RgbaImage) -> Result<PathBuf, SaveError> {
    task::spawn_blocking(move || save_blocking(image))
        .await
        .map_err(|e| SaveError::TaskJoin(e.to_string()))?
}

fn save_blocking(image: RgbaImage) -> Result<PathBuf, SaveError> {
    let dir = output_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| SaveError::CreateDir {
        path: dir.clone(),
        reason: e.to_string(),
    })?;

    let path = dir.join(output_filename());
    image.save(&path).map_err(|e| SaveError::Write {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    println!("💾 Saved {}x{} image to {}", image.width(), image.height(), path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_shape() {
        let name = output_filename();
        assert!(name.starts_with("filtered_"));
        assert!(name.ends_with(".png"));
        // "filtered_" + yyyymmdd + "_" + hhmmss + ".png"
        assert_eq!(name.len(), "filtered_".len() + 8 + 1 + 6 + ".png".len());
    }

    #[test]
    fn test_output_dir_ends_with_app_folder() {
        // Skipped silently on systems with no resolvable home directory.
        if let Ok(dir) = output_dir() {
            assert_eq!(dir.file_name().unwrap(), "snapfilter");
        }
    }
}
