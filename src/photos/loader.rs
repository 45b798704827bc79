/// Picked-image decoding
///
/// The file dialog hands back a path; decoding it can take a moment for
/// large photos, so it runs on a blocking task off the UI thread.

use image::DynamicImage;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task;

/// File extensions offered by the picker dialog.
pub const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "bmp", "gif", "tiff", "webp"];

#[derive(Debug, Clone, Error)]
pub enum LoadError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("could not decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("decode task failed: {0}")]
    TaskJoin(String),
}

/// Decode an image file into memory.
///
/// Spawns a blocking task because decoding is CPU-bound.
pub async fn load_image(path: PathBuf) -> Result<DynamicImage, LoadError> {
    task::spawn_blocking(move || load_image_blocking(&path))
        .await
        .map_err(|e| LoadError::TaskJoin(e.to_string()))?
}

fn load_image_blocking(path: &Path) -> Result<DynamicImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound(path.to_path_buf()));
    }

    let image = image::open(path).map_err(|e| LoadError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    println!(
        "📷 Loaded image: {}x{} from {}",
        image.width(),
        image.height(),
        path.display()
    );

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_reported() {
        let path = PathBuf::from("/definitely/not/a/real/photo.png");
        let result = load_image_blocking(&path);
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_undecodable_file_is_reported() {
        let dir = std::env::temp_dir();
        let path = dir.join("snapfilter_loader_test_not_an_image.png");
        std::fs::write(&path, b"this is not a png").unwrap();

        let result = load_image_blocking(&path);
        assert!(matches!(result, Err(LoadError::Decode { .. })));

        let _ = std::fs::remove_file(&path);
    }
}
